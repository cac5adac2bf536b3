// File: farmledger-core/src/repositories/json/return_requests.rs

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use farmledger_common::error::Error;
use farmledger_common::models::return_request::ReturnRequest;
use farmledger_common::traits::repository_traits::ReturnRequestRepository;

use crate::storage::JsonStore;

const COLLECTION: &str = "return_requests";

pub struct JsonReturnRequestRepository {
    store: Arc<JsonStore>,
    requests: RwLock<Vec<ReturnRequest>>,
}

impl JsonReturnRequestRepository {
    /// Rehydrates the collection from the store.
    pub async fn load(store: Arc<JsonStore>) -> Result<Self, Error> {
        let requests = store.load(COLLECTION).await?.unwrap_or_default();
        Ok(Self {
            store,
            requests: RwLock::new(requests),
        })
    }
}

#[async_trait]
impl ReturnRequestRepository for JsonReturnRequestRepository {
    async fn create_request(&self, request: &ReturnRequest) -> Result<(), Error> {
        let mut requests = self.requests.write().await;
        requests.push(request.clone());
        self.store.save(COLLECTION, &*requests).await
    }

    async fn get_request(&self, request_id: Uuid) -> Result<Option<ReturnRequest>, Error> {
        let requests = self.requests.read().await;
        Ok(requests.iter().find(|r| r.request_id == request_id).cloned())
    }

    async fn update_request(&self, request: &ReturnRequest) -> Result<(), Error> {
        let mut requests = self.requests.write().await;
        match requests.iter_mut().find(|r| r.request_id == request.request_id) {
            Some(slot) => *slot = request.clone(),
            None => {
                return Err(Error::NotFound(format!(
                    "return request {}",
                    request.request_id
                )));
            }
        }
        self.store.save(COLLECTION, &*requests).await
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ReturnRequest>, Error> {
        let requests = self.requests.read().await;
        Ok(requests
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<ReturnRequest>, Error> {
        let requests = self.requests.read().await;
        Ok(requests.clone())
    }
}
