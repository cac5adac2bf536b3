pub mod credits;
pub mod gifting;
pub mod recently_viewed;
pub mod referrals;
pub mod return_requests;
pub mod rewards;
