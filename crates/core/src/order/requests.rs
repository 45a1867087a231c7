//! API request types for order operations.
//!
//! Pure data types with no I/O. Field names follow the JSON payloads
//! (`userId`, `orderStatus`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::{Order, OrderChanges};

/// Request payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub product: String,
    pub price: f64,
}

impl CreateOrderRequest {
    /// Convert into a new pending order.
    pub fn into_order(self) -> Order {
        Order::new(&self.user_id, self.product, self.price)
    }
}

/// Request payload for updating an order.
///
/// Both fields are optional; an absent field is written as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub order_status: Option<String>,
}

impl UpdateOrderRequest {
    /// Create an empty update request.
    ///
    /// Handlers deserialize the payload directly; the builder methods exist
    /// for composing requests in tests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the product.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Set the order status.
    pub fn with_order_status(mut self, status: impl Into<String>) -> Self {
        self.order_status = Some(status.into());
        self
    }

    /// Convert into the field assignments for an update stamped with `updated_at`.
    pub fn into_changes(self, updated_at: NaiveDate) -> OrderChanges {
        OrderChanges {
            product: self.product,
            order_status: self.order_status,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{today, DEFAULT_ORDER_STATUS};

    #[test]
    fn test_create_request_from_json() {
        let request: CreateOrderRequest =
            serde_json::from_str(r#"{"userId":"u1","product":"widget","price":9.99}"#).unwrap();

        assert_eq!(request.user_id, "u1");
        assert_eq!(request.product, "widget");
        assert_eq!(request.price, 9.99);
    }

    #[test]
    fn test_create_request_rejects_missing_price() {
        let result: Result<CreateOrderRequest, _> =
            serde_json::from_str(r#"{"userId":"u1","product":"widget"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_into_order() {
        let order = CreateOrderRequest {
            user_id: "u1".to_string(),
            product: "widget".to_string(),
            price: 9.99,
        }
        .into_order();

        assert!(order.partition_key.starts_with("ORDER#"));
        assert_eq!(order.sort_key, "USER#u1");
        assert_eq!(order.order_status.as_deref(), Some(DEFAULT_ORDER_STATUS));
        assert_eq!(order.created_at, Some(today()));
    }

    #[test]
    fn test_update_request_missing_fields_are_none() {
        let request: UpdateOrderRequest = serde_json::from_str(r#"{"product":"gadget"}"#).unwrap();

        assert_eq!(request, UpdateOrderRequest::new().with_product("gadget"));
    }

    #[test]
    fn test_update_request_into_changes() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        let changes = UpdateOrderRequest::new()
            .with_product("gadget")
            .with_order_status("SHIPPED")
            .into_changes(date);

        assert_eq!(changes.product.as_deref(), Some("gadget"));
        assert_eq!(changes.order_status.as_deref(), Some("SHIPPED"));
        assert_eq!(changes.updated_at, date);
    }
}
