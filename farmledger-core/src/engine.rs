// File: farmledger-core/src/engine.rs

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use farmledger_common::error::Error;

use crate::catalog::{CampaignCatalog, ContainerCatalog, RedemptionCatalog};
use crate::repositories::{
    JsonCreditLedgerRepository, JsonGiftingRepository, JsonRecentlyViewedRepository,
    JsonReferralRepository, JsonReturnRequestRepository, JsonRewardRepository,
};
use crate::services::{CreditService, GiftService, ReturnService, RewardService};
use crate::storage::JsonStore;

/// Everything wired together over one storage directory: catalogs, the JSON
/// repositories rehydrated from disk, and the services on top of them.
pub struct FarmLedger {
    pub containers: Arc<ContainerCatalog>,
    pub redemptions: Arc<RedemptionCatalog>,
    pub campaigns: Arc<CampaignCatalog>,
    pub credits: Arc<CreditService>,
    pub returns: Arc<ReturnService>,
    pub rewards: Arc<RewardService>,
    pub gifts: Arc<GiftService>,
    pub recently_viewed: Arc<JsonRecentlyViewedRepository>,
}

impl FarmLedger {
    /// Opens the storage directory, rehydrates every collection, and builds
    /// the service graph with the default catalogs.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, Error> {
        let store = Arc::new(JsonStore::open(root).await?);
        info!("farm ledger storage at {}", store.root().display());

        let containers = Arc::new(ContainerCatalog::aadhya_default());
        let redemptions = Arc::new(RedemptionCatalog::aadhya_default());
        let campaigns = Arc::new(CampaignCatalog::aadhya_default());

        let ledger_repo = Arc::new(JsonCreditLedgerRepository::load(store.clone()).await?);
        let request_repo = Arc::new(JsonReturnRequestRepository::load(store.clone()).await?);
        let referral_repo = Arc::new(JsonReferralRepository::load(store.clone()).await?);
        let reward_repo = Arc::new(JsonRewardRepository::load(store.clone()).await?);
        let gifting_repo = Arc::new(JsonGiftingRepository::load(store.clone()).await?);
        let recently_viewed = Arc::new(JsonRecentlyViewedRepository::load(store.clone()).await?);

        let credits = Arc::new(CreditService::new(ledger_repo, redemptions.clone()));
        let returns = Arc::new(ReturnService::new(
            containers.clone(),
            request_repo,
            credits.clone(),
        ));
        let rewards = Arc::new(RewardService::new(referral_repo, reward_repo));
        let gifts = Arc::new(GiftService::new(gifting_repo));

        Ok(Self {
            containers,
            redemptions,
            campaigns,
            credits,
            returns,
            rewards,
            gifts,
            recently_viewed,
        })
    }
}
