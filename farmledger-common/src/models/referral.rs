use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferralStatus {
    Pending,
    Completed,
    Rewarded,
}

/// A logged referral attempt. The referrer's discount reward is granted
/// eagerly when the referral is sent, not when the referred friend converts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Referral {
    pub referral_id: Uuid,
    pub referrer_id: Uuid,
    pub referred_email: String,
    pub referred_name: Option<String>,
    pub status: ReferralStatus,
    pub reward_amount: u32,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}
