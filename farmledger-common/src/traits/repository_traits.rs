// File: farmledger-common/src/traits/repository_traits.rs
//
// Storage ports for every persisted collection. The core crate implements
// them over a JSON document store; tests are free to substitute in-memory
// mocks.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Error;
use crate::models::credit::CreditTransaction;
use crate::models::gifting::{CustomHamper, GiftCardOrder, GiftOrder};
use crate::models::referral::Referral;
use crate::models::return_request::ReturnRequest;
use crate::models::reward::Reward;

#[async_trait]
pub trait ReturnRequestRepository: Send + Sync {
    async fn create_request(&self, request: &ReturnRequest) -> Result<(), Error>;
    async fn get_request(&self, request_id: Uuid) -> Result<Option<ReturnRequest>, Error>;
    /// Replaces the stored record with the same id. Unknown ids are an error.
    async fn update_request(&self, request: &ReturnRequest) -> Result<(), Error>;
    /// Returns the user's requests in storage order (no explicit sort).
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ReturnRequest>, Error>;
    async fn list_all(&self) -> Result<Vec<ReturnRequest>, Error>;
}

#[async_trait]
pub trait CreditLedgerRepository: Send + Sync {
    /// Appends to the transaction log. Transactions are never updated or
    /// deleted afterwards.
    async fn append_transaction(&self, tx: &CreditTransaction) -> Result<(), Error>;
    /// The user's transactions sorted most-recent-first.
    async fn transactions_for_user(&self, user_id: Uuid) -> Result<Vec<CreditTransaction>, Error>;
    async fn balance(&self, user_id: Uuid) -> Result<i64, Error>;
    /// Applies a signed delta to the user's cached balance and returns the
    /// new value.
    async fn adjust_balance(&self, user_id: Uuid, delta: i64) -> Result<i64, Error>;
    async fn set_balance(&self, user_id: Uuid, balance: i64) -> Result<(), Error>;
}

#[async_trait]
pub trait ReferralRepository: Send + Sync {
    async fn create_referral(&self, referral: &Referral) -> Result<(), Error>;
    async fn get_referral(&self, referral_id: Uuid) -> Result<Option<Referral>, Error>;
    async fn update_referral(&self, referral: &Referral) -> Result<(), Error>;
    async fn list_for_user(&self, referrer_id: Uuid) -> Result<Vec<Referral>, Error>;
    /// Stores the user's current referral code, replacing any previous one.
    async fn set_code(&self, user_id: Uuid, code: &str) -> Result<(), Error>;
    async fn code_for_user(&self, user_id: Uuid) -> Result<Option<String>, Error>;
}

#[async_trait]
pub trait RewardRepository: Send + Sync {
    async fn create_reward(&self, reward: &Reward) -> Result<(), Error>;
    async fn get_reward(&self, reward_id: Uuid) -> Result<Option<Reward>, Error>;
    async fn update_reward(&self, reward: &Reward) -> Result<(), Error>;
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Reward>, Error>;
}

#[async_trait]
pub trait GiftingRepository: Send + Sync {
    async fn create_gift_card(&self, card: &GiftCardOrder) -> Result<(), Error>;
    async fn list_gift_cards(&self, user_id: Uuid) -> Result<Vec<GiftCardOrder>, Error>;

    async fn create_hamper(&self, hamper: &CustomHamper) -> Result<(), Error>;
    async fn list_hampers(&self, user_id: Uuid) -> Result<Vec<CustomHamper>, Error>;

    async fn create_gift_order(&self, order: &GiftOrder) -> Result<(), Error>;
    async fn get_gift_order(&self, order_id: Uuid) -> Result<Option<GiftOrder>, Error>;
    async fn update_gift_order(&self, order: &GiftOrder) -> Result<(), Error>;
    async fn list_gift_orders(&self, user_id: Uuid) -> Result<Vec<GiftOrder>, Error>;
}

#[async_trait]
pub trait RecentlyViewedRepository: Send + Sync {
    /// Moves the product to the front of the list, deduplicating and
    /// truncating to the configured maximum.
    async fn record_view(&self, product_id: &str) -> Result<(), Error>;
    /// Product ids, most-recent-first.
    async fn recent(&self) -> Result<Vec<String>, Error>;
}
