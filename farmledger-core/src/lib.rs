// farmledger-core/src/lib.rs

pub mod catalog;
pub mod engine;
pub mod repositories;
pub mod services;
pub mod storage;
pub mod test_utils;

pub use engine::FarmLedger;
pub use farmledger_common::error::Error;
pub use storage::JsonStore;
