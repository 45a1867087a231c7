use async_trait::async_trait;

use crate::order::{Order, OrderChanges, OrderKey, UpdatedOrderFields};

use super::Result;

/// Repository for order items.
///
/// Each method maps to exactly one store operation, atomic for a single key.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Writes an order unconditionally, replacing any item with the same key.
    async fn put_order(&self, order: &Order) -> Result<()>;

    /// Gets every item under a partition key, across all sort keys.
    async fn query_orders(&self, partition_key: &str) -> Result<Vec<Order>>;

    /// Sets `product`, `orderStatus` and `updatedAt` on the item at `key`,
    /// creating it if absent, and returns the values written.
    async fn update_order(&self, key: &OrderKey, changes: &OrderChanges)
        -> Result<UpdatedOrderFields>;

    /// Deletes the item at `key`. Deleting a missing item succeeds.
    async fn delete_order(&self, key: &OrderKey) -> Result<()>;

    /// Cheap probe that the backing store is reachable.
    async fn health_check(&self) -> Result<()>;
}
