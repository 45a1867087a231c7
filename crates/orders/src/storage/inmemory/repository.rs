//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use orders_core::order::{Order, OrderChanges, OrderKey, UpdatedOrderFields};
use orders_core::storage::{OrderRepository, Result};

/// In-memory storage backend.
///
/// Items are ordered by partition key then sort key, so a partition query
/// returns items in sort-key order as DynamoDB does.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    orders: Arc<RwLock<BTreeMap<OrderKey, Order>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepository {
    async fn put_order(&self, order: &Order) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.insert(order.key(), order.clone());
        Ok(())
    }

    async fn query_orders(&self, partition_key: &str) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|(key, _)| key.partition_key == partition_key)
            .map(|(_, order)| order.clone())
            .collect())
    }

    async fn update_order(
        &self,
        key: &OrderKey,
        changes: &OrderChanges,
    ) -> Result<UpdatedOrderFields> {
        let mut orders = self.orders.write().await;
        let order = orders.entry(key.clone()).or_insert_with(|| Order {
            partition_key: key.partition_key.clone(),
            sort_key: key.sort_key.clone(),
            order_status: None,
            created_at: None,
            updated_at: None,
            product: None,
            price: None,
        });

        order.product = changes.product.clone();
        order.order_status = changes.order_status.clone();
        order.updated_at = Some(changes.updated_at);

        Ok(UpdatedOrderFields::from(changes))
    }

    async fn delete_order(&self, key: &OrderKey) -> Result<()> {
        let mut orders = self.orders.write().await;
        orders.remove(key);
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}
