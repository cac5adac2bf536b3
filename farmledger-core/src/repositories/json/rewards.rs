// File: farmledger-core/src/repositories/json/rewards.rs

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use farmledger_common::error::Error;
use farmledger_common::models::reward::Reward;
use farmledger_common::traits::repository_traits::RewardRepository;

use crate::storage::JsonStore;

const COLLECTION: &str = "rewards";

pub struct JsonRewardRepository {
    store: Arc<JsonStore>,
    rewards: RwLock<Vec<Reward>>,
}

impl JsonRewardRepository {
    pub async fn load(store: Arc<JsonStore>) -> Result<Self, Error> {
        let rewards = store.load(COLLECTION).await?.unwrap_or_default();
        Ok(Self {
            store,
            rewards: RwLock::new(rewards),
        })
    }
}

#[async_trait]
impl RewardRepository for JsonRewardRepository {
    async fn create_reward(&self, reward: &Reward) -> Result<(), Error> {
        let mut rewards = self.rewards.write().await;
        rewards.push(reward.clone());
        self.store.save(COLLECTION, &*rewards).await
    }

    async fn get_reward(&self, reward_id: Uuid) -> Result<Option<Reward>, Error> {
        let rewards = self.rewards.read().await;
        Ok(rewards.iter().find(|r| r.reward_id == reward_id).cloned())
    }

    async fn update_reward(&self, reward: &Reward) -> Result<(), Error> {
        let mut rewards = self.rewards.write().await;
        match rewards.iter_mut().find(|r| r.reward_id == reward.reward_id) {
            Some(slot) => *slot = reward.clone(),
            None => return Err(Error::NotFound(format!("reward {}", reward.reward_id))),
        }
        self.store.save(COLLECTION, &*rewards).await
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Reward>, Error> {
        let rewards = self.rewards.read().await;
        Ok(rewards
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}
