//! Order request handling
//!
//! `OrderHandler` runs validation, talks to the repository and reports what
//! happened as an [`OrderOutcome`]. It knows nothing about HTTP; the REST
//! exposure maps outcomes to status codes and bodies.

use crate::core::error::ServiceResult;
use crate::core::order::{Order, OrderPayload};
use crate::core::repository::OrderRepository;
use crate::core::validation::validate_order;
use std::sync::Arc;

/// Result of a handler operation that reached a decision
///
/// Repository failures are not outcomes; they surface as `Err` from the
/// handler methods.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderOutcome {
    /// The candidate broke one or more field rules; nothing was persisted
    ValidationFailed(Vec<String>),
    /// No order exists with the requested id
    NotFound,
    /// A new order was stored
    Created(Order),
    /// The requested order
    Found(Order),
    /// The order after merging and saving the candidate
    Updated(Order),
    /// Every stored order
    Listed(Vec<Order>),
    /// The order was removed
    NoContent,
}

/// Stateless handler for order operations
///
/// Cloning is cheap; clones share the same repository.
#[derive(Clone)]
pub struct OrderHandler {
    repository: Arc<dyn OrderRepository>,
}

impl OrderHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    /// Validate and store a new order
    pub async fn create(&self, payload: OrderPayload) -> ServiceResult<OrderOutcome> {
        let errors = validate_order(&payload);
        if !errors.is_empty() {
            tracing::debug!(violations = errors.len(), "rejected order creation");
            return Ok(OrderOutcome::ValidationFailed(errors));
        }

        let saved = self.repository.save(payload.into_order()).await?;
        tracing::info!(order_id = ?saved.id, "order created");
        Ok(OrderOutcome::Created(saved))
    }

    /// List every order
    pub async fn list(&self) -> ServiceResult<OrderOutcome> {
        let orders = self.repository.find_all().await?;
        Ok(OrderOutcome::Listed(orders))
    }

    /// Get a single order
    pub async fn get(&self, id: i64) -> ServiceResult<OrderOutcome> {
        match self.repository.find_by_id(id).await? {
            Some(order) => Ok(OrderOutcome::Found(order)),
            None => {
                tracing::debug!(order_id = id, "order not found");
                Ok(OrderOutcome::NotFound)
            }
        }
    }

    /// Replace the client-writable fields of an existing order
    ///
    /// The candidate is validated before the lookup, so an invalid body for
    /// an unknown id yields `ValidationFailed` rather than `NotFound`. The
    /// stored id always wins over anything the client sent. Concurrent
    /// updates of one id are last-write-wins.
    pub async fn update(&self, id: i64, payload: OrderPayload) -> ServiceResult<OrderOutcome> {
        let errors = validate_order(&payload);
        if !errors.is_empty() {
            tracing::debug!(order_id = id, violations = errors.len(), "rejected order update");
            return Ok(OrderOutcome::ValidationFailed(errors));
        }

        let Some(mut existing) = self.repository.find_by_id(id).await? else {
            tracing::debug!(order_id = id, "order not found for update");
            return Ok(OrderOutcome::NotFound);
        };

        existing.merge_from(payload.into_order());
        let saved = self.repository.save(existing).await?;
        tracing::info!(order_id = id, "order updated");
        Ok(OrderOutcome::Updated(saved))
    }

    /// Remove an existing order
    pub async fn delete(&self, id: i64) -> ServiceResult<OrderOutcome> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            tracing::debug!(order_id = id, "order not found for delete");
            return Ok(OrderOutcome::NotFound);
        };

        self.repository.delete(&existing).await?;
        tracing::info!(order_id = id, "order deleted");
        Ok(OrderOutcome::NoContent)
    }
}
