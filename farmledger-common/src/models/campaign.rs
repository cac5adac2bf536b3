// File: farmledger-common/src/models/campaign.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

use crate::models::reward::DiscountKind;

/// A short time-boxed discount campaign. `is_active` is an author-set
/// kill-switch independent of the time window; a sale is live only when the
/// flag is set AND `now` is inside the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashSale {
    pub sale_id: String,
    pub title: String,
    pub description: String,
    pub discount_kind: DiscountKind,
    pub discount_value: u32,
    pub products: Vec<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_active: bool,
}

impl FlashSale {
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.starts_at <= now && now <= self.ends_at
    }
}

/// A season-long campaign. Same liveness rule as [`FlashSale`]: author flag
/// AND time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalOffer {
    pub offer_id: String,
    pub season: String,
    pub title: String,
    pub description: String,
    pub discount_kind: DiscountKind,
    pub discount_value: u32,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub is_active: bool,
}

impl SeasonalOffer {
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.starts_at <= now && now <= self.ends_at
    }
}
