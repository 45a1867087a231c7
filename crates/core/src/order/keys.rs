//! Order key generation functions.
//!
//! Pure functions for building the partition and sort keys of an order item.
//! All functions are sync and have no side effects.

use uuid::Uuid;

// ============================================================================
// Key prefixes
// ============================================================================

pub const ORDER_PREFIX: &str = "ORDER#";
pub const USER_PREFIX: &str = "USER#";

/// Generate the partition key for a new order.
///
/// Pattern: `ORDER#<order_id>`
pub fn order_pk(order_id: Uuid) -> String {
    format!("{ORDER_PREFIX}{order_id}")
}

/// Generate the sort key binding an order to its user.
///
/// Pattern: `USER#<user_id>`. The user ID is opaque and copied verbatim.
pub fn user_sk(user_id: &str) -> String {
    format!("{USER_PREFIX}{user_id}")
}

/// Resolve an order identifier taken from a request path into a partition key.
///
/// Clients may send either the full stored key (`ORDER#<id>`, with `#`
/// percent-encoded) or the bare identifier.
pub fn order_pk_from_path(raw: &str) -> String {
    with_prefix(ORDER_PREFIX, raw)
}

/// Resolve a user identifier taken from a request path into a sort key.
///
/// Accepts either `USER#<id>` or the bare identifier.
pub fn user_sk_from_path(raw: &str) -> String {
    with_prefix(USER_PREFIX, raw)
}

fn with_prefix(prefix: &str, raw: &str) -> String {
    if raw.starts_with(prefix) {
        raw.to_string()
    } else {
        format!("{prefix}{raw}")
    }
}
