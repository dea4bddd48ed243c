//! In-memory implementation of OrderRepository for testing and development

use crate::core::error::StorageError;
use crate::core::{Order, OrderRepository};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory order repository
///
/// Uses RwLock for thread-safe access and an atomic sequence for ids, so ids
/// start at 1 and are never reused, even after deletes.
#[derive(Clone)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<BTreeMap<i64, Order>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryOrderRepository {
    /// Create a new, empty in-memory repository
    pub fn new() -> Self {
        Self {
            orders: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, mut order: Order) -> Result<Order> {
        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let id = match order.id {
            Some(id) if orders.contains_key(&id) => id,
            Some(id) => {
                return Err(StorageError::IntegrityError {
                    message: format!("order {} does not exist", id),
                }
                .into());
            }
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                order.id = Some(id);
                id
            }
        };

        orders.insert(id, order.clone());

        Ok(order)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>> {
        let orders = self
            .orders
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(orders.get(&id).cloned())
    }

    async fn delete(&self, order: &Order) -> Result<()> {
        let id = order
            .id
            .ok_or_else(|| anyhow!("Cannot delete an order that was never saved"))?;

        let mut orders = self
            .orders
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        orders.remove(&id);

        Ok(())
    }
}
