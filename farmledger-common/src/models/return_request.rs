// File: farmledger-common/src/models/return_request.rs
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Deserialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReturnStatus {
    Pending,
    Scheduled,
    PickedUp,
    Verified,
    Credited,
    Rejected,
}

impl ReturnStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, ReturnStatus::Credited | ReturnStatus::Rejected)
    }

    /// Explicit transition table. Requests move strictly forward through the
    /// pickup pipeline; `Rejected` is reachable from every non-terminal state.
    /// Forward skips (e.g. pending straight to credited) are not legal.
    pub fn allowed_next(self) -> &'static [ReturnStatus] {
        use ReturnStatus::*;
        match self {
            Pending => &[Scheduled, Rejected],
            Scheduled => &[PickedUp, Rejected],
            PickedUp => &[Verified, Rejected],
            Verified => &[Credited, Rejected],
            Credited | Rejected => &[],
        }
    }

    pub fn can_transition_to(self, next: ReturnStatus) -> bool {
        self.allowed_next().contains(&next)
    }
}

impl fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReturnStatus::Pending => "pending",
            ReturnStatus::Scheduled => "scheduled",
            ReturnStatus::PickedUp => "picked-up",
            ReturnStatus::Verified => "verified",
            ReturnStatus::Credited => "credited",
            ReturnStatus::Rejected => "rejected",
        };
        write!(f, "{}", s)
    }
}

/// One container line on a return request. Name and unit value are copied
/// from the catalog at creation time and never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnLineItem {
    pub container_id: String,
    pub container_name: String,
    pub quantity: u32,
    pub credit_value: u32,
    pub total_credits: u32,
}

/// Pickup details supplied at creation. All fields are optional at this
/// layer; requiring them before submission is the UI's job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupDetails {
    pub pickup_date: Option<NaiveDate>,
    pub time_slot: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnRequest {
    pub request_id: Uuid,
    pub user_id: Uuid,
    pub items: Vec<ReturnLineItem>,
    /// Sum of line totals at creation time. Never recomputed afterwards,
    /// even if catalog credit values change.
    pub total_credits: u32,
    pub status: ReturnStatus,
    pub request_date: DateTime<Utc>,
    pub pickup: PickupDetails,
    pub verification_notes: Option<String>,
    pub rejection_reason: Option<String>,
    pub credited_date: Option<DateTime<Utc>>,
}
