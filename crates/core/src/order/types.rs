use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::keys;
use super::operations::today;

/// Status assigned to every order at creation time.
pub const DEFAULT_ORDER_STATUS: &str = "PENDING";

/// An order as stored in the key-value table.
///
/// Only the key attributes are guaranteed. Updates are upserts, so a record
/// can exist without `createdAt` or `price`, and `product`/`orderStatus` may
/// have been overwritten with null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "PK")]
    pub partition_key: String,
    #[serde(rename = "SK")]
    pub sort_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Order {
    /// Creates a new pending order for a user with a freshly generated ID.
    pub fn new(user_id: &str, product: impl Into<String>, price: f64) -> Self {
        Self {
            partition_key: keys::order_pk(Uuid::new_v4()),
            sort_key: keys::user_sk(user_id),
            order_status: Some(DEFAULT_ORDER_STATUS.to_string()),
            created_at: Some(today()),
            updated_at: None,
            product: Some(product.into()),
            price: Some(price),
        }
    }

    /// Sets a specific order ID (useful for testing).
    ///
    /// Production orders always take a fresh ID from [`Order::new`].
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.partition_key = keys::order_pk(id);
        self
    }

    /// Sets a specific creation date (useful for testing).
    pub fn with_created_at(mut self, date: NaiveDate) -> Self {
        self.created_at = Some(date);
        self
    }

    /// Returns the composite primary key of this order.
    pub fn key(&self) -> OrderKey {
        OrderKey {
            partition_key: self.partition_key.clone(),
            sort_key: self.sort_key.clone(),
        }
    }
}

/// The composite primary key of an order item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderKey {
    pub partition_key: String,
    pub sort_key: String,
}

impl OrderKey {
    /// Builds a key from the raw `orderId` and `userId` path segments.
    pub fn from_path(order_id: &str, user_id: &str) -> Self {
        Self {
            partition_key: keys::order_pk_from_path(order_id),
            sort_key: keys::user_sk_from_path(user_id),
        }
    }
}

/// The field assignments an update writes.
///
/// All three fields are always written; `None` is stored as an explicit null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderChanges {
    pub product: Option<String>,
    pub order_status: Option<String>,
    pub updated_at: NaiveDate,
}

/// The fields an update reports back from the store.
///
/// Serialized with explicit nulls so the response always carries all three keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedOrderFields {
    pub product: Option<String>,
    pub order_status: Option<String>,
    pub updated_at: Option<NaiveDate>,
}

impl From<&OrderChanges> for UpdatedOrderFields {
    fn from(changes: &OrderChanges) -> Self {
        Self {
            product: changes.product.clone(),
            order_status: changes.order_status.clone(),
            updated_at: Some(changes.updated_at),
        }
    }
}
