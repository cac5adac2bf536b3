// File: farmledger-core/src/repositories/json/referrals.rs

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use farmledger_common::error::Error;
use farmledger_common::models::referral::Referral;
use farmledger_common::traits::repository_traits::ReferralRepository;

use crate::storage::JsonStore;

const REFERRALS: &str = "referrals";
const CODES: &str = "referral_codes";

/// Referral log plus the per-user current referral code. Codes are keyed by
/// user id; regenerating a code overwrites the previous one.
pub struct JsonReferralRepository {
    store: Arc<JsonStore>,
    referrals: RwLock<Vec<Referral>>,
    codes: RwLock<HashMap<Uuid, String>>,
}

impl JsonReferralRepository {
    pub async fn load(store: Arc<JsonStore>) -> Result<Self, Error> {
        let referrals = store.load(REFERRALS).await?.unwrap_or_default();
        let codes = store.load(CODES).await?.unwrap_or_default();
        Ok(Self {
            store,
            referrals: RwLock::new(referrals),
            codes: RwLock::new(codes),
        })
    }
}

#[async_trait]
impl ReferralRepository for JsonReferralRepository {
    async fn create_referral(&self, referral: &Referral) -> Result<(), Error> {
        let mut referrals = self.referrals.write().await;
        referrals.push(referral.clone());
        self.store.save(REFERRALS, &*referrals).await
    }

    async fn get_referral(&self, referral_id: Uuid) -> Result<Option<Referral>, Error> {
        let referrals = self.referrals.read().await;
        Ok(referrals
            .iter()
            .find(|r| r.referral_id == referral_id)
            .cloned())
    }

    async fn update_referral(&self, referral: &Referral) -> Result<(), Error> {
        let mut referrals = self.referrals.write().await;
        match referrals
            .iter_mut()
            .find(|r| r.referral_id == referral.referral_id)
        {
            Some(slot) => *slot = referral.clone(),
            None => {
                return Err(Error::NotFound(format!(
                    "referral {}",
                    referral.referral_id
                )));
            }
        }
        self.store.save(REFERRALS, &*referrals).await
    }

    async fn list_for_user(&self, referrer_id: Uuid) -> Result<Vec<Referral>, Error> {
        let referrals = self.referrals.read().await;
        Ok(referrals
            .iter()
            .filter(|r| r.referrer_id == referrer_id)
            .cloned()
            .collect())
    }

    async fn set_code(&self, user_id: Uuid, code: &str) -> Result<(), Error> {
        let mut codes = self.codes.write().await;
        codes.insert(user_id, code.to_string());
        self.store.save(CODES, &*codes).await
    }

    async fn code_for_user(&self, user_id: Uuid) -> Result<Option<String>, Error> {
        let codes = self.codes.read().await;
        Ok(codes.get(&user_id).cloned())
    }
}
