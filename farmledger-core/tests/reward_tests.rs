// tests/reward_tests.rs

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use dashmap::DashMap;
use tokio_test::assert_ok;
use uuid::Uuid;

use farmledger_common::models::referral::{Referral, ReferralStatus};
use farmledger_common::models::reward::{DiscountKind, Reward, RewardKind};
use farmledger_common::traits::repository_traits::{ReferralRepository, RewardRepository};
use farmledger_core::Error;
use farmledger_core::services::RewardService;
use farmledger_core::services::reward_service::{
    BIRTHDAY_DISCOUNT_PERCENT, BIRTHDAY_MAX_DISCOUNT, REFERRAL_REWARD_AMOUNT,
    REFERRAL_REWARD_VALID_DAYS,
};

/// In-memory referral storage over DashMaps, standing in for the JSON repo.
#[derive(Default)]
struct MockReferralRepository {
    referrals: DashMap<Uuid, Referral>,
    codes: DashMap<Uuid, String>,
}

#[async_trait]
impl ReferralRepository for MockReferralRepository {
    async fn create_referral(&self, referral: &Referral) -> Result<(), Error> {
        self.referrals.insert(referral.referral_id, referral.clone());
        Ok(())
    }

    async fn get_referral(&self, referral_id: Uuid) -> Result<Option<Referral>, Error> {
        Ok(self.referrals.get(&referral_id).map(|e| e.value().clone()))
    }

    async fn update_referral(&self, referral: &Referral) -> Result<(), Error> {
        if !self.referrals.contains_key(&referral.referral_id) {
            return Err(Error::NotFound(format!("referral {}", referral.referral_id)));
        }
        self.referrals.insert(referral.referral_id, referral.clone());
        Ok(())
    }

    async fn list_for_user(&self, referrer_id: Uuid) -> Result<Vec<Referral>, Error> {
        Ok(self
            .referrals
            .iter()
            .filter(|e| e.value().referrer_id == referrer_id)
            .map(|e| e.value().clone())
            .collect())
    }

    async fn set_code(&self, user_id: Uuid, code: &str) -> Result<(), Error> {
        self.codes.insert(user_id, code.to_string());
        Ok(())
    }

    async fn code_for_user(&self, user_id: Uuid) -> Result<Option<String>, Error> {
        Ok(self.codes.get(&user_id).map(|e| e.value().clone()))
    }
}

#[derive(Default)]
struct MockRewardRepository {
    rewards: DashMap<Uuid, Reward>,
}

#[async_trait]
impl RewardRepository for MockRewardRepository {
    async fn create_reward(&self, reward: &Reward) -> Result<(), Error> {
        self.rewards.insert(reward.reward_id, reward.clone());
        Ok(())
    }

    async fn get_reward(&self, reward_id: Uuid) -> Result<Option<Reward>, Error> {
        Ok(self.rewards.get(&reward_id).map(|e| e.value().clone()))
    }

    async fn update_reward(&self, reward: &Reward) -> Result<(), Error> {
        if !self.rewards.contains_key(&reward.reward_id) {
            return Err(Error::NotFound(format!("reward {}", reward.reward_id)));
        }
        self.rewards.insert(reward.reward_id, reward.clone());
        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Reward>, Error> {
        Ok(self
            .rewards
            .iter()
            .filter(|e| e.value().user_id == user_id)
            .map(|e| e.value().clone())
            .collect())
    }
}

fn service() -> (Arc<MockReferralRepository>, Arc<MockRewardRepository>, RewardService) {
    let referrals = Arc::new(MockReferralRepository::default());
    let rewards = Arc::new(MockRewardRepository::default());
    let service = RewardService::new(referrals.clone(), rewards.clone());
    (referrals, rewards, service)
}

#[tokio::test]
async fn referral_code_has_prefix_id_slice_and_suffix() {
    let (referrals, _, service) = service();
    let user = Uuid::new_v4();

    let code = assert_ok!(service.generate_referral_code(user).await);
    assert!(code.starts_with("AADHYA-"));
    // prefix + '-' + 4 id chars + 4 random chars
    assert_eq!(code.len(), "AADHYA-".len() + 8);

    let id_fragment: String = user.simple().to_string().chars().take(4).collect();
    assert!(code[7..].starts_with(&id_fragment.to_uppercase()));

    // The code is stored per user and retrievable.
    assert_eq!(
        referrals.code_for_user(user).await.unwrap().as_deref(),
        Some(code.as_str())
    );
}

#[tokio::test]
async fn regenerating_overwrites_the_stored_code() -> Result<(), Error> {
    let (_, _, service) = service();
    let user = Uuid::new_v4();

    service.generate_referral_code(user).await?;
    let second = service.generate_referral_code(user).await?;
    assert_eq!(service.referral_code(user).await?.as_deref(), Some(second.as_str()));
    Ok(())
}

#[tokio::test]
async fn send_referral_grants_the_reward_eagerly() -> Result<(), Error> {
    let (_, _, service) = service();
    let referrer = Uuid::new_v4();

    let (referral, reward) = service
        .send_referral(referrer, "friend@example.com", Some("Friend"))
        .await?;

    assert_eq!(referral.status, ReferralStatus::Pending);
    assert_eq!(referral.reward_amount, REFERRAL_REWARD_AMOUNT);
    assert_eq!(referral.referred_email, "friend@example.com");

    // The reward exists before the friend converts, active immediately.
    assert_eq!(reward.kind, RewardKind::Referral);
    assert_eq!(reward.discount_kind, DiscountKind::Fixed);
    assert_eq!(reward.discount_value, REFERRAL_REWARD_AMOUNT);
    assert_eq!(
        reward.valid_until - reward.valid_from,
        Duration::days(REFERRAL_REWARD_VALID_DAYS)
    );

    let active = service.get_active_rewards(referrer).await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].reward_id, reward.reward_id);
    Ok(())
}

#[tokio::test]
async fn completing_a_referral_flips_status_without_a_second_grant() -> Result<(), Error> {
    let (_, rewards, service) = service();
    let referrer = Uuid::new_v4();

    let (referral, _) = service.send_referral(referrer, "a@b.c", None).await?;
    let completed = service.complete_referral(referral.referral_id).await?;
    assert_eq!(completed.status, ReferralStatus::Completed);
    assert!(completed.completed_at.is_some());

    // Still exactly one reward: the eager grant from send time.
    assert_eq!(rewards.list_for_user(referrer).await?.len(), 1);

    let missing = service.complete_referral(Uuid::new_v4()).await;
    assert!(matches!(missing, Err(Error::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn birthday_reward_is_idempotent_per_year() -> Result<(), Error> {
    let (_, _, service) = service();
    let user = Uuid::new_v4();
    let this_month = Utc::now().month();
    let birth_date = NaiveDate::from_ymd_opt(1992, this_month, 15).unwrap();

    let first = service.check_birthday_reward(user, birth_date).await?;
    let reward = first.expect("first call in the birth month issues a reward");
    assert_eq!(reward.kind, RewardKind::Birthday);
    assert_eq!(reward.discount_value, BIRTHDAY_DISCOUNT_PERCENT);
    assert_eq!(reward.max_discount, Some(BIRTHDAY_MAX_DISCOUNT));
    assert!(reward.is_active_at(Utc::now()));

    // Second call in the same calendar year: nothing new.
    let second = service.check_birthday_reward(user, birth_date).await?;
    assert!(second.is_none());
    assert_eq!(service.get_active_rewards(user).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn no_birthday_reward_outside_the_birth_month() -> Result<(), Error> {
    let (_, _, service) = service();
    let user = Uuid::new_v4();
    let other_month = (Utc::now().month() % 12) + 1;
    let birth_date = NaiveDate::from_ymd_opt(1992, other_month, 15).unwrap();

    assert!(service.check_birthday_reward(user, birth_date).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn active_rewards_exclude_used_and_out_of_window() -> Result<(), Error> {
    let (_, rewards, service) = service();
    let user = Uuid::new_v4();
    let now = Utc::now();

    let expired = Reward {
        reward_id: Uuid::new_v4(),
        user_id: user,
        kind: RewardKind::Seasonal,
        title: "Last season".into(),
        description: "Long gone".into(),
        discount_kind: DiscountKind::Percentage,
        discount_value: 10,
        code: "OLD-SEASON".into(),
        min_purchase: None,
        max_discount: None,
        valid_from: now - Duration::days(60),
        valid_until: now - Duration::days(30),
        is_used: false,
        used_at: None,
    };
    rewards.create_reward(&expired).await?;

    let (_, granted) = service.send_referral(user, "x@y.z", None).await?;
    assert_eq!(service.get_active_rewards(user).await?.len(), 1);

    // Consuming the live reward removes it from the active set.
    assert!(service.use_reward(granted.reward_id).await?);
    assert!(service.get_active_rewards(user).await?.is_empty());

    // A used reward cannot be consumed again, an expired one never could be.
    assert!(!service.use_reward(granted.reward_id).await?);
    assert!(!service.use_reward(expired.reward_id).await?);

    let missing = service.use_reward(Uuid::new_v4()).await;
    assert!(matches!(missing, Err(Error::NotFound(_))));
    Ok(())
}
