// File: farmledger-common/src/models/reward.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RewardKind {
    Referral,
    Birthday,
    Seasonal,
    FlashSale,
    Loyalty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Percentage,
    Fixed,
}

/// A time-boxed discount code issued by referral, birthday, or campaign
/// logic. Records are never deleted; only `is_used`/`used_at` flip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    pub reward_id: Uuid,
    pub user_id: Uuid,
    pub kind: RewardKind,
    pub title: String,
    pub description: String,
    pub discount_kind: DiscountKind,
    pub discount_value: u32,
    pub code: String,
    pub min_purchase: Option<u32>,
    pub max_discount: Option<u32>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub is_used: bool,
    pub used_at: Option<DateTime<Utc>>,
}

impl Reward {
    /// A reward is active iff it has not been used and `now` falls inside
    /// its validity window (inclusive on both ends).
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.is_used && self.valid_from <= now && now <= self.valid_until
    }
}
