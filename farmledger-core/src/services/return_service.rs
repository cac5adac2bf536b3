// File: farmledger-core/src/services/return_service.rs

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use farmledger_common::error::Error;
use farmledger_common::models::return_request::{
    PickupDetails, ReturnLineItem, ReturnRequest, ReturnStatus,
};
use farmledger_common::traits::repository_traits::ReturnRequestRepository;

use crate::catalog::ContainerCatalog;
use crate::services::credit_service::CreditService;

/// One container pick from the UI.
#[derive(Debug, Clone)]
pub struct ContainerSelection {
    pub container_id: String,
    pub quantity: u32,
}

/// Creation input. Pickup fields are optional here; requiring them before
/// submission is the UI's responsibility, not a workflow invariant.
#[derive(Debug, Clone)]
pub struct NewReturnRequest {
    pub user_id: Uuid,
    pub selections: Vec<ContainerSelection>,
    pub pickup: PickupDetails,
}

/// Captures a user's intent to return containers for credit and tracks
/// physical fulfilment through the status pipeline.
pub struct ReturnService {
    catalog: Arc<ContainerCatalog>,
    requests: Arc<dyn ReturnRequestRepository + Send + Sync>,
    credits: Arc<CreditService>,
}

impl ReturnService {
    pub fn new(
        catalog: Arc<ContainerCatalog>,
        requests: Arc<dyn ReturnRequestRepository + Send + Sync>,
        credits: Arc<CreditService>,
    ) -> Self {
        Self {
            catalog,
            requests,
            credits,
        }
    }

    /// Pure preview of what a selection is worth. Ids that do not resolve in
    /// the catalog contribute 0.
    pub fn calculate_credits(&self, selections: &[ContainerSelection]) -> u32 {
        selections
            .iter()
            .map(|s| {
                self.catalog
                    .get(&s.container_id)
                    .map(|c| c.credit_value * s.quantity)
                    .unwrap_or(0)
            })
            .sum()
    }

    /// Creates a `pending` request, denormalizing container name and unit
    /// value into each line so later catalog changes never rewrite history.
    pub async fn create_return_request(
        &self,
        input: NewReturnRequest,
    ) -> Result<ReturnRequest, Error> {
        if input.selections.is_empty() {
            return Err(Error::Validation(
                "a return request needs at least one container".into(),
            ));
        }
        if input.selections.iter().any(|s| s.quantity == 0) {
            return Err(Error::Validation(
                "container quantities must be at least 1".into(),
            ));
        }

        let items: Vec<ReturnLineItem> = input
            .selections
            .iter()
            .filter_map(|s| {
                let container = self.catalog.get(&s.container_id);
                if container.is_none() {
                    debug!("dropping unknown container id '{}'", s.container_id);
                }
                container.map(|c| ReturnLineItem {
                    container_id: c.container_id.clone(),
                    container_name: c.name.clone(),
                    quantity: s.quantity,
                    credit_value: c.credit_value,
                    total_credits: c.credit_value * s.quantity,
                })
            })
            .collect();

        let total_credits = items.iter().map(|i| i.total_credits).sum();
        let request = ReturnRequest {
            request_id: Uuid::new_v4(),
            user_id: input.user_id,
            items,
            total_credits,
            status: ReturnStatus::Pending,
            request_date: Utc::now(),
            pickup: input.pickup,
            verification_notes: None,
            rejection_reason: None,
            credited_date: None,
        };
        self.requests.create_request(&request).await?;
        info!(
            "created return request {} for user {} worth {} credits",
            request.request_id, request.user_id, request.total_credits
        );
        Ok(request)
    }

    /// Advances a request through the status pipeline. Illegal jumps are
    /// rejected against the transition table; moving into `credited` earns
    /// the request's total into the ledger exactly once per successful call.
    pub async fn transition(
        &self,
        request_id: Uuid,
        next: ReturnStatus,
        notes: Option<&str>,
    ) -> Result<ReturnRequest, Error> {
        let mut request = self
            .requests
            .get_request(request_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("return request {request_id}")))?;

        if !request.status.can_transition_to(next) {
            return Err(Error::InvalidTransition {
                from: request.status.to_string(),
                to: next.to_string(),
            });
        }

        match next {
            ReturnStatus::Verified => {
                if let Some(n) = notes {
                    request.verification_notes = Some(n.to_string());
                }
            }
            ReturnStatus::Rejected => {
                if let Some(n) = notes {
                    request.rejection_reason = Some(n.to_string());
                }
            }
            ReturnStatus::Credited => {
                request.credited_date = Some(Utc::now());
            }
            _ => {}
        }
        let previous = request.status;
        request.status = next;
        self.requests.update_request(&request).await?;
        info!(
            "return request {} moved {} -> {}",
            request.request_id, previous, next
        );

        if next == ReturnStatus::Credited {
            self.credits
                .earn_credits(
                    request.user_id,
                    request.total_credits,
                    &format!("Container return {}", request.request_id),
                    Some(request.request_id),
                )
                .await?;
        }
        Ok(request)
    }

    /// The user's requests in storage order.
    pub async fn requests_for_user(&self, user_id: Uuid) -> Result<Vec<ReturnRequest>, Error> {
        self.requests.list_for_user(user_id).await
    }
}
