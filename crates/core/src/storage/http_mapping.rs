//! Pure functions for mapping errors to HTTP status codes.

use super::RepositoryError;
use crate::order::OrderError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - `QueryFailed` -> 500 (Internal Server Error)
/// - `InvalidData` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use orders_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::ConnectionFailed("no route to host".to_string());
/// assert_eq!(repository_error_to_status_code(&error), 503);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::ConnectionFailed(_) => 503,
        RepositoryError::QueryFailed(_) => 500,
        RepositoryError::InvalidData(_) => 500,
    }
}

/// Maps an [`OrderError`] to an HTTP status code. Every variant is a client error.
pub fn order_error_to_status_code(error: &OrderError) -> u16 {
    match error {
        OrderError::EmptyUserId | OrderError::PrefixedUserId | OrderError::InvalidPrice(_) => 400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = RepositoryError::ConnectionFailed("refused".to_string());
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = RepositoryError::QueryFailed("Throughput exceeded, please retry".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        let error = RepositoryError::InvalidData("Missing or invalid field: SK".to_string());
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_order_errors_map_to_400() {
        assert_eq!(order_error_to_status_code(&OrderError::EmptyUserId), 400);
        assert_eq!(order_error_to_status_code(&OrderError::PrefixedUserId), 400);
        assert_eq!(
            order_error_to_status_code(&OrderError::InvalidPrice(f64::NAN)),
            400
        );
    }
}
