// File: farmledger-common/src/models/mod.rs
pub mod campaign;
pub mod container;
pub mod credit;
pub mod gifting;
pub mod referral;
pub mod return_request;
pub mod reward;

pub use campaign::{FlashSale, SeasonalOffer};
pub use container::{Container, ContainerType};
pub use credit::{CreditRedemption, CreditTransaction, CreditTransactionKind, RedemptionKind};
pub use gifting::{CustomHamper, GiftCardOrder, GiftOrder, GiftOrderStatus, HamperItem};
pub use referral::{Referral, ReferralStatus};
pub use return_request::{PickupDetails, ReturnLineItem, ReturnRequest, ReturnStatus};
pub use reward::{DiscountKind, Reward, RewardKind};
