//! Persistence gateway for orders

use crate::core::order::Order;
use anyhow::Result;
use async_trait::async_trait;

/// Repository trait for order storage
///
/// The handler only depends on this trait; implementations decide how
/// records are stored and how ids are generated.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert the order when it has no id, otherwise overwrite the stored
    /// record with the same id
    ///
    /// Returns the stored record with its id populated. Saving an order whose
    /// id is unknown to the store is an error.
    async fn save(&self, order: Order) -> Result<Order>;

    /// List every stored order
    async fn find_all(&self) -> Result<Vec<Order>>;

    /// Get an order by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>>;

    /// Remove a stored order
    async fn delete(&self, order: &Order) -> Result<()>;
}
