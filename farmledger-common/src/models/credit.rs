// File: farmledger-common/src/models/credit.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditTransactionKind {
    Earned,
    Redeemed,
    Expired,
    Bonus,
}

/// One movement in the Farm Credits ledger. The amount is always stored
/// positive; its sign is implied by the kind. Transactions are append-only
/// and never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditTransaction {
    pub transaction_id: Uuid,
    pub user_id: Uuid,
    pub kind: CreditTransactionKind,
    pub amount: u32,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    /// Set when the transaction was produced by crediting a return request.
    pub return_request_id: Option<Uuid>,
    /// Earned credits expire one year after issue.
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedemptionKind {
    Discount,
    FreeProduct,
    BonusPoints,
}

/// A catalog entry describing what a credit balance can be exchanged for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditRedemption {
    pub redemption_id: String,
    pub code: String,
    pub kind: RedemptionKind,
    pub credit_cost: u32,
    pub value: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub available: bool,
}
