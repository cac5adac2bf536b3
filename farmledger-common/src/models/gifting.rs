// File: farmledger-common/src/models/gifting.rs
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// A purchased gift card, delivered by email as a redeemable code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftCardOrder {
    pub gift_card_id: Uuid,
    pub user_id: Uuid,
    pub amount: u32,
    pub recipient_name: String,
    pub recipient_email: String,
    pub message: Option<String>,
    pub code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HamperItem {
    pub product_id: String,
    pub name: String,
    pub price: u32,
    pub quantity: u32,
}

/// A user-assembled gift hamper. The total is the sum of line price times
/// quantity at creation, denormalized the same way return requests are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomHamper {
    pub hamper_id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub items: Vec<HamperItem>,
    pub total_price: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftOrderStatus {
    Placed,
    Dispatched,
    Delivered,
}

impl GiftOrderStatus {
    /// Forward-only fulfilment pipeline.
    pub fn allowed_next(self) -> &'static [GiftOrderStatus] {
        match self {
            GiftOrderStatus::Placed => &[GiftOrderStatus::Dispatched],
            GiftOrderStatus::Dispatched => &[GiftOrderStatus::Delivered],
            GiftOrderStatus::Delivered => &[],
        }
    }

    pub fn can_transition_to(self, next: GiftOrderStatus) -> bool {
        self.allowed_next().contains(&next)
    }
}

impl fmt::Display for GiftOrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GiftOrderStatus::Placed => "placed",
            GiftOrderStatus::Dispatched => "dispatched",
            GiftOrderStatus::Delivered => "delivered",
        };
        write!(f, "{}", s)
    }
}

/// A gift delivery order referencing a hamper, a gift card, or both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftOrder {
    pub order_id: Uuid,
    pub user_id: Uuid,
    pub hamper_id: Option<Uuid>,
    pub gift_card_id: Option<Uuid>,
    pub recipient_address: String,
    pub scheduled_date: Option<NaiveDate>,
    pub status: GiftOrderStatus,
    pub created_at: DateTime<Utc>,
}
