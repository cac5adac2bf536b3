// File: farmledger-core/src/repositories/mod.rs

pub mod json;

pub use farmledger_common::traits::repository_traits::{
    CreditLedgerRepository, GiftingRepository, RecentlyViewedRepository, ReferralRepository,
    ReturnRequestRepository, RewardRepository,
};

pub use json::credits::JsonCreditLedgerRepository;
pub use json::gifting::JsonGiftingRepository;
pub use json::recently_viewed::JsonRecentlyViewedRepository;
pub use json::referrals::JsonReferralRepository;
pub use json::return_requests::JsonReturnRequestRepository;
pub use json::rewards::JsonRewardRepository;
