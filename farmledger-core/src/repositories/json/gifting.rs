// File: farmledger-core/src/repositories/json/gifting.rs

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use farmledger_common::error::Error;
use farmledger_common::models::gifting::{CustomHamper, GiftCardOrder, GiftOrder};
use farmledger_common::traits::repository_traits::GiftingRepository;

use crate::storage::JsonStore;

const GIFT_CARDS: &str = "gift_cards";
const HAMPERS: &str = "custom_hampers";
const GIFT_ORDERS: &str = "gift_orders";

/// The three gifting collections share one repository; each persists to its
/// own document.
pub struct JsonGiftingRepository {
    store: Arc<JsonStore>,
    gift_cards: RwLock<Vec<GiftCardOrder>>,
    hampers: RwLock<Vec<CustomHamper>>,
    gift_orders: RwLock<Vec<GiftOrder>>,
}

impl JsonGiftingRepository {
    pub async fn load(store: Arc<JsonStore>) -> Result<Self, Error> {
        let gift_cards = store.load(GIFT_CARDS).await?.unwrap_or_default();
        let hampers = store.load(HAMPERS).await?.unwrap_or_default();
        let gift_orders = store.load(GIFT_ORDERS).await?.unwrap_or_default();
        Ok(Self {
            store,
            gift_cards: RwLock::new(gift_cards),
            hampers: RwLock::new(hampers),
            gift_orders: RwLock::new(gift_orders),
        })
    }
}

#[async_trait]
impl GiftingRepository for JsonGiftingRepository {
    async fn create_gift_card(&self, card: &GiftCardOrder) -> Result<(), Error> {
        let mut gift_cards = self.gift_cards.write().await;
        gift_cards.push(card.clone());
        self.store.save(GIFT_CARDS, &*gift_cards).await
    }

    async fn list_gift_cards(&self, user_id: Uuid) -> Result<Vec<GiftCardOrder>, Error> {
        let gift_cards = self.gift_cards.read().await;
        Ok(gift_cards
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_hamper(&self, hamper: &CustomHamper) -> Result<(), Error> {
        let mut hampers = self.hampers.write().await;
        hampers.push(hamper.clone());
        self.store.save(HAMPERS, &*hampers).await
    }

    async fn list_hampers(&self, user_id: Uuid) -> Result<Vec<CustomHamper>, Error> {
        let hampers = self.hampers.read().await;
        Ok(hampers
            .iter()
            .filter(|h| h.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create_gift_order(&self, order: &GiftOrder) -> Result<(), Error> {
        let mut gift_orders = self.gift_orders.write().await;
        gift_orders.push(order.clone());
        self.store.save(GIFT_ORDERS, &*gift_orders).await
    }

    async fn get_gift_order(&self, order_id: Uuid) -> Result<Option<GiftOrder>, Error> {
        let gift_orders = self.gift_orders.read().await;
        Ok(gift_orders.iter().find(|o| o.order_id == order_id).cloned())
    }

    async fn update_gift_order(&self, order: &GiftOrder) -> Result<(), Error> {
        let mut gift_orders = self.gift_orders.write().await;
        match gift_orders.iter_mut().find(|o| o.order_id == order.order_id) {
            Some(slot) => *slot = order.clone(),
            None => return Err(Error::NotFound(format!("gift order {}", order.order_id))),
        }
        self.store.save(GIFT_ORDERS, &*gift_orders).await
    }

    async fn list_gift_orders(&self, user_id: Uuid) -> Result<Vec<GiftOrder>, Error> {
        let gift_orders = self.gift_orders.read().await;
        Ok(gift_orders
            .iter()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }
}
