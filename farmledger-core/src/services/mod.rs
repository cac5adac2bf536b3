// File: farmledger-core/src/services/mod.rs

pub mod credit_service;
pub mod gift_service;
pub mod return_service;
pub mod reward_service;
pub mod share;

pub use credit_service::CreditService;
pub use gift_service::GiftService;
pub use return_service::{ContainerSelection, NewReturnRequest, ReturnService};
pub use reward_service::RewardService;
