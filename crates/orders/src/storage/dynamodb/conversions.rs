//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and order types.
//! These are testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::NaiveDate;
use orders_core::order::{Order, OrderChanges, UpdatedOrderFields};
use orders_core::storage::RepositoryError;

/// Date format for `createdAt` / `updatedAt`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Update expression written by every order update.
pub const UPDATE_EXPRESSION: &str = "SET product = :p, orderStatus = :o, updatedAt = :u";

// ============================================================================
// Order conversions
// ============================================================================

/// Convert an Order to DynamoDB item.
pub fn order_to_item(order: &Order) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(order.partition_key.clone()),
    );
    item.insert("SK".to_string(), AttributeValue::S(order.sort_key.clone()));

    // Data
    if let Some(status) = &order.order_status {
        item.insert("orderStatus".to_string(), AttributeValue::S(status.clone()));
    }
    if let Some(date) = order.created_at {
        item.insert("createdAt".to_string(), date_value(date));
    }
    if let Some(date) = order.updated_at {
        item.insert("updatedAt".to_string(), date_value(date));
    }
    if let Some(product) = &order.product {
        item.insert("product".to_string(), AttributeValue::S(product.clone()));
    }
    if let Some(price) = order.price {
        item.insert("price".to_string(), AttributeValue::N(price.to_string()));
    }

    item
}

/// Convert a DynamoDB item to Order.
pub fn item_to_order(item: &HashMap<String, AttributeValue>) -> Result<Order, RepositoryError> {
    Ok(Order {
        partition_key: get_string(item, "PK")?,
        sort_key: get_string(item, "SK")?,
        order_status: get_optional_string(item, "orderStatus"),
        created_at: get_optional_date(item, "createdAt")?,
        updated_at: get_optional_date(item, "updatedAt")?,
        product: get_optional_string(item, "product"),
        price: get_optional_number(item, "price")?,
    })
}

// ============================================================================
// Update conversions
// ============================================================================

/// Build the expression attribute values for [`UPDATE_EXPRESSION`].
///
/// Absent fields are bound as `NULL` so the update always writes all three.
pub fn changes_to_values(changes: &OrderChanges) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (":p".to_string(), nullable_string(changes.product.as_deref())),
        (
            ":o".to_string(),
            nullable_string(changes.order_status.as_deref()),
        ),
        (":u".to_string(), date_value(changes.updated_at)),
    ])
}

/// Convert the `UPDATED_NEW` attributes of an update into the reported fields.
pub fn attributes_to_updated_fields(
    attributes: &HashMap<String, AttributeValue>,
) -> Result<UpdatedOrderFields, RepositoryError> {
    Ok(UpdatedOrderFields {
        product: get_optional_string(attributes, "product"),
        order_status: get_optional_string(attributes, "orderStatus"),
        updated_at: get_optional_date(attributes, "updatedAt")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

fn date_value(date: NaiveDate) -> AttributeValue {
    AttributeValue::S(date.format(DATE_FORMAT).to_string())
}

fn nullable_string(value: Option<&str>) -> AttributeValue {
    match value {
        Some(s) => AttributeValue::S(s.to_string()),
        None => AttributeValue::Null(true),
    }
}

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}

fn get_optional_date(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<NaiveDate>, RepositoryError> {
    get_optional_string(item, key)
        .map(|s| {
            NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(|e| {
                RepositoryError::InvalidData(format!("Invalid date in {}: {} ({})", key, s, e))
            })
        })
        .transpose()
}

fn get_optional_number(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<f64>, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_n().ok())
        .map(|n| {
            n.parse::<f64>().map_err(|e| {
                RepositoryError::InvalidData(format!("Invalid number in {}: {} ({})", key, n, e))
            })
        })
        .transpose()
}
