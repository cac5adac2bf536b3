// File: farmledger-core/src/repositories/json/recently_viewed.rs

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use farmledger_common::error::Error;
use farmledger_common::traits::repository_traits::RecentlyViewedRepository;

use crate::storage::JsonStore;

const COLLECTION: &str = "recently_viewed";

/// Cap on how many product ids the browsing trail keeps.
pub const RECENTLY_VIEWED_MAX: usize = 10;

pub struct JsonRecentlyViewedRepository {
    store: Arc<JsonStore>,
    products: RwLock<Vec<String>>,
}

impl JsonRecentlyViewedRepository {
    pub async fn load(store: Arc<JsonStore>) -> Result<Self, Error> {
        let products = store.load(COLLECTION).await?.unwrap_or_default();
        Ok(Self {
            store,
            products: RwLock::new(products),
        })
    }
}

#[async_trait]
impl RecentlyViewedRepository for JsonRecentlyViewedRepository {
    async fn record_view(&self, product_id: &str) -> Result<(), Error> {
        let mut products = self.products.write().await;
        products.retain(|p| p != product_id);
        products.insert(0, product_id.to_string());
        products.truncate(RECENTLY_VIEWED_MAX);
        self.store.save(COLLECTION, &*products).await
    }

    async fn recent(&self) -> Result<Vec<String>, Error> {
        let products = self.products.read().await;
        Ok(products.clone())
    }
}
