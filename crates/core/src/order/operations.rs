use chrono::{NaiveDate, Utc};

use super::error::OrderError;
use super::keys::USER_PREFIX;
use super::requests::CreateOrderRequest;

/// Largest price accepted at creation, inside the store's numeric range.
pub const MAX_PRICE: f64 = 1e125;

/// Smallest non-zero price the store can represent.
pub const MIN_POSITIVE_PRICE: f64 = 1e-130;

/// Returns the current UTC calendar date.
///
/// Order timestamps are date-only: an ISO-8601 instant truncated to `YYYY-MM-DD`.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Validates a create payload before an order is built from it.
///
/// A user ID that already carries the `USER#` prefix is rejected: path
/// lookups treat a prefixed segment as the full sort key, so such an order
/// could never be addressed again.
pub fn validate_create_request(request: &CreateOrderRequest) -> Result<(), OrderError> {
    if request.user_id.trim().is_empty() {
        return Err(OrderError::EmptyUserId);
    }
    if request.user_id.starts_with(USER_PREFIX) {
        return Err(OrderError::PrefixedUserId);
    }
    if !is_storable_price(request.price) {
        return Err(OrderError::InvalidPrice(request.price));
    }
    Ok(())
}

fn is_storable_price(price: f64) -> bool {
    price == 0.0 || (MIN_POSITIVE_PRICE..=MAX_PRICE).contains(&price)
}
