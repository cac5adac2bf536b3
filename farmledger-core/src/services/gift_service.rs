// File: farmledger-core/src/services/gift_service.rs

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::info;
use uuid::Uuid;

use farmledger_common::error::Error;
use farmledger_common::models::gifting::{
    CustomHamper, GiftCardOrder, GiftOrder, GiftOrderStatus, HamperItem,
};
use farmledger_common::traits::repository_traits::GiftingRepository;

pub const GIFT_CARD_CODE_PREFIX: &str = "AFGC";

/// Gift cards, custom hampers, and the delivery orders that carry them.
pub struct GiftService {
    gifting: Arc<dyn GiftingRepository + Send + Sync>,
}

fn gift_card_code() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(8)
        .map(char::from)
        .collect::<String>()
        .to_uppercase();
    format!("{GIFT_CARD_CODE_PREFIX}-{suffix}")
}

impl GiftService {
    pub fn new(gifting: Arc<dyn GiftingRepository + Send + Sync>) -> Self {
        Self { gifting }
    }

    pub async fn create_gift_card(
        &self,
        user_id: Uuid,
        amount: u32,
        recipient_name: &str,
        recipient_email: &str,
        message: Option<&str>,
    ) -> Result<GiftCardOrder, Error> {
        if amount == 0 {
            return Err(Error::Validation("gift card amount must be positive".into()));
        }
        let card = GiftCardOrder {
            gift_card_id: Uuid::new_v4(),
            user_id,
            amount,
            recipient_name: recipient_name.to_string(),
            recipient_email: recipient_email.to_string(),
            message: message.map(str::to_owned),
            code: gift_card_code(),
            created_at: Utc::now(),
        };
        self.gifting.create_gift_card(&card).await?;
        info!(
            "gift card {} for {} created by user {}",
            card.code, recipient_email, user_id
        );
        Ok(card)
    }

    /// Assembles a hamper; the total is the sum of line price times quantity
    /// at creation and is never recomputed.
    pub async fn create_hamper(
        &self,
        user_id: Uuid,
        name: &str,
        items: Vec<HamperItem>,
    ) -> Result<CustomHamper, Error> {
        if items.is_empty() {
            return Err(Error::Validation("a hamper needs at least one item".into()));
        }
        let total_price = items.iter().map(|i| i.price * i.quantity).sum();
        let hamper = CustomHamper {
            hamper_id: Uuid::new_v4(),
            user_id,
            name: name.to_string(),
            items,
            total_price,
            created_at: Utc::now(),
        };
        self.gifting.create_hamper(&hamper).await?;
        Ok(hamper)
    }

    /// Places a delivery order carrying a hamper, a gift card, or both.
    pub async fn place_gift_order(
        &self,
        user_id: Uuid,
        hamper_id: Option<Uuid>,
        gift_card_id: Option<Uuid>,
        recipient_address: &str,
        scheduled_date: Option<NaiveDate>,
    ) -> Result<GiftOrder, Error> {
        if hamper_id.is_none() && gift_card_id.is_none() {
            return Err(Error::Validation(
                "a gift order needs a hamper or a gift card".into(),
            ));
        }
        let order = GiftOrder {
            order_id: Uuid::new_v4(),
            user_id,
            hamper_id,
            gift_card_id,
            recipient_address: recipient_address.to_string(),
            scheduled_date,
            status: GiftOrderStatus::Placed,
            created_at: Utc::now(),
        };
        self.gifting.create_gift_order(&order).await?;
        info!("gift order {} placed by user {}", order.order_id, user_id);
        Ok(order)
    }

    /// Moves an order forward through placed -> dispatched -> delivered.
    pub async fn transition_gift_order(
        &self,
        order_id: Uuid,
        next: GiftOrderStatus,
    ) -> Result<GiftOrder, Error> {
        let mut order = self
            .gifting
            .get_gift_order(order_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("gift order {order_id}")))?;
        if !order.status.can_transition_to(next) {
            return Err(Error::InvalidTransition {
                from: order.status.to_string(),
                to: next.to_string(),
            });
        }
        order.status = next;
        self.gifting.update_gift_order(&order).await?;
        Ok(order)
    }

    pub async fn gift_cards_for_user(&self, user_id: Uuid) -> Result<Vec<GiftCardOrder>, Error> {
        self.gifting.list_gift_cards(user_id).await
    }

    pub async fn hampers_for_user(&self, user_id: Uuid) -> Result<Vec<CustomHamper>, Error> {
        self.gifting.list_hampers(user_id).await
    }

    pub async fn gift_orders_for_user(&self, user_id: Uuid) -> Result<Vec<GiftOrder>, Error> {
        self.gifting.list_gift_orders(user_id).await
    }
}
