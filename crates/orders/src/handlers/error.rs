use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use orders_core::order::OrderError;
use orders_core::storage::{
    order_error_to_status_code, repository_error_to_status_code, RepositoryError,
};
use serde_json::json;

/// Application error type that wraps `anyhow::Error`.
///
/// Every failure leaves the handlers as a JSON body `{"error": "..."}` with a
/// status derived from the underlying error type.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if let Some(order_error) = self.0.downcast_ref::<OrderError>() {
            let code = order_error_to_status_code(order_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST)
        } else if self.0.is::<JsonRejection>() {
            // Syntax, type and content-type rejections are all malformed input.
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status, error = %self.0, "Request rejected");
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
