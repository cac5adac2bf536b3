// File: farmledger-core/src/services/reward_service.rs

use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::{debug, info};
use uuid::Uuid;

use farmledger_common::error::Error;
use farmledger_common::models::referral::{Referral, ReferralStatus};
use farmledger_common::models::reward::{DiscountKind, Reward, RewardKind};
use farmledger_common::traits::repository_traits::{ReferralRepository, RewardRepository};

pub const REFERRAL_CODE_PREFIX: &str = "AADHYA";
/// Fixed credit value attached to every referral, and the face value of the
/// eagerly granted referrer reward.
pub const REFERRAL_REWARD_AMOUNT: u32 = 100;
pub const REFERRAL_REWARD_VALID_DAYS: i64 = 90;
pub const BIRTHDAY_DISCOUNT_PERCENT: u32 = 20;
pub const BIRTHDAY_MAX_DISCOUNT: u32 = 200;

/// Generates shareable referral codes, logs referral attempts, and issues
/// time-boxed discount rewards from their several origins.
pub struct RewardService {
    referrals: Arc<dyn ReferralRepository + Send + Sync>,
    rewards: Arc<dyn RewardRepository + Send + Sync>,
}

fn random_suffix(len: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}

/// First and last instant of the month containing `now`.
fn month_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let (year, month) = (now.year(), now.month());
    let start = Utc
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .unwrap_or(now);
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let next = Utc
        .with_ymd_and_hms(next_year, next_month, 1, 0, 0, 0)
        .single()
        .unwrap_or(now);
    (start, next - Duration::seconds(1))
}

impl RewardService {
    pub fn new(
        referrals: Arc<dyn ReferralRepository + Send + Sync>,
        rewards: Arc<dyn RewardRepository + Send + Sync>,
    ) -> Self {
        Self { referrals, rewards }
    }

    /// Builds and stores the user's referral code: fixed prefix, a slice of
    /// the user id, and a random suffix. Calling again replaces the stored
    /// code; idempotency is deliberately not enforced.
    pub async fn generate_referral_code(&self, user_id: Uuid) -> Result<String, Error> {
        let id_fragment: String = user_id
            .simple()
            .to_string()
            .chars()
            .take(4)
            .collect::<String>()
            .to_uppercase();
        let code = format!("{REFERRAL_CODE_PREFIX}-{id_fragment}{}", random_suffix(4));
        self.referrals.set_code(user_id, &code).await?;
        info!("referral code for user {} is now {}", user_id, code);
        Ok(code)
    }

    pub async fn referral_code(&self, user_id: Uuid) -> Result<Option<String>, Error> {
        self.referrals.code_for_user(user_id).await
    }

    /// Logs a pending referral and eagerly grants the referrer an active
    /// reward at send time, not at the friend's conversion. The grant is
    /// valid from today for 90 days.
    pub async fn send_referral(
        &self,
        referrer_id: Uuid,
        email: &str,
        name: Option<&str>,
    ) -> Result<(Referral, Reward), Error> {
        let now = Utc::now();
        let referral = Referral {
            referral_id: Uuid::new_v4(),
            referrer_id,
            referred_email: email.to_string(),
            referred_name: name.map(str::to_owned),
            status: ReferralStatus::Pending,
            reward_amount: REFERRAL_REWARD_AMOUNT,
            created_at: now,
            completed_at: None,
        };
        self.referrals.create_referral(&referral).await?;

        let reward = Reward {
            reward_id: Uuid::new_v4(),
            user_id: referrer_id,
            kind: RewardKind::Referral,
            title: "Referral bonus".into(),
            description: format!("Thanks for referring {email}"),
            discount_kind: DiscountKind::Fixed,
            discount_value: REFERRAL_REWARD_AMOUNT,
            code: format!("REF-{}", random_suffix(8)),
            min_purchase: None,
            max_discount: None,
            valid_from: now,
            valid_until: now + Duration::days(REFERRAL_REWARD_VALID_DAYS),
            is_used: false,
            used_at: None,
        };
        self.rewards.create_reward(&reward).await?;
        info!(
            "referral {} sent to {} by user {}, reward {} granted",
            referral.referral_id, email, referrer_id, reward.code
        );
        Ok((referral, reward))
    }

    /// Marks a referral as converted. The referrer's reward was already
    /// granted at send time, so no further grant happens here.
    pub async fn complete_referral(&self, referral_id: Uuid) -> Result<Referral, Error> {
        let mut referral = self
            .referrals
            .get_referral(referral_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("referral {referral_id}")))?;
        if referral.status == ReferralStatus::Pending {
            referral.status = ReferralStatus::Completed;
            referral.completed_at = Some(Utc::now());
            self.referrals.update_referral(&referral).await?;
        }
        Ok(referral)
    }

    pub async fn referrals_for_user(&self, referrer_id: Uuid) -> Result<Vec<Referral>, Error> {
        self.referrals.list_for_user(referrer_id).await
    }

    /// Issues the user's birthday reward if the current month is their birth
    /// month and none was issued this calendar year yet. Idempotent per
    /// (user, year): the second call in a year returns `None`.
    pub async fn check_birthday_reward(
        &self,
        user_id: Uuid,
        birth_date: NaiveDate,
    ) -> Result<Option<Reward>, Error> {
        let now = Utc::now();
        if now.month() != birth_date.month() {
            return Ok(None);
        }
        let existing = self.rewards.list_for_user(user_id).await?;
        let already_issued = existing
            .iter()
            .any(|r| r.kind == RewardKind::Birthday && r.valid_from.year() == now.year());
        if already_issued {
            debug!("birthday reward already issued this year for user {}", user_id);
            return Ok(None);
        }

        let (valid_from, valid_until) = month_window(now);
        let reward = Reward {
            reward_id: Uuid::new_v4(),
            user_id,
            kind: RewardKind::Birthday,
            title: "Birthday treat".into(),
            description: "20% off one order during your birthday month".into(),
            discount_kind: DiscountKind::Percentage,
            discount_value: BIRTHDAY_DISCOUNT_PERCENT,
            code: format!("BDAY-{}", random_suffix(8)),
            min_purchase: None,
            max_discount: Some(BIRTHDAY_MAX_DISCOUNT),
            valid_from,
            valid_until,
            is_used: false,
            used_at: None,
        };
        self.rewards.create_reward(&reward).await?;
        info!("birthday reward {} issued for user {}", reward.code, user_id);
        Ok(Some(reward))
    }

    /// The user's unused rewards whose validity window contains now.
    pub async fn get_active_rewards(&self, user_id: Uuid) -> Result<Vec<Reward>, Error> {
        let now = Utc::now();
        let rewards = self.rewards.list_for_user(user_id).await?;
        Ok(rewards.into_iter().filter(|r| r.is_active_at(now)).collect())
    }

    /// Consumes a reward. Returns `false` (no mutation) when it was already
    /// used or is outside its validity window; unknown ids are an error.
    pub async fn use_reward(&self, reward_id: Uuid) -> Result<bool, Error> {
        let now = Utc::now();
        let mut reward = self
            .rewards
            .get_reward(reward_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("reward {reward_id}")))?;
        if !reward.is_active_at(now) {
            debug!("reward {} is not active, not consuming", reward_id);
            return Ok(false);
        }
        reward.is_used = true;
        reward.used_at = Some(now);
        self.rewards.update_reward(&reward).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_window_spans_whole_month() {
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 14, 30, 0).single().unwrap();
        let (start, end) = month_window(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).single().unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 8, 31, 23, 59, 59).single().unwrap());
    }

    #[test]
    fn month_window_handles_december() {
        let now = Utc.with_ymd_and_hms(2026, 12, 5, 0, 0, 0).single().unwrap();
        let (start, end) = month_window(now);
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 12, 1, 0, 0, 0).single().unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).single().unwrap());
    }

    #[test]
    fn random_suffix_is_uppercase_alphanumeric() {
        let s = random_suffix(8);
        assert_eq!(s.len(), 8);
        assert!(s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
