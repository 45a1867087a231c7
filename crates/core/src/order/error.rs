use thiserror::Error;

/// Errors raised while validating an inbound order payload.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrderError {
    #[error("User ID cannot be empty")]
    EmptyUserId,
    #[error("User ID must not start with '{}'", crate::order::USER_PREFIX)]
    PrefixedUserId,
    #[error("Invalid price: {0} (must be zero or between 1e-130 and 1e125)")]
    InvalidPrice(f64),
}
