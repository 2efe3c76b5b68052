//! Error types for the gateway crate.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use vend_backend::BackendError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The backend call failed and the route does not map the failure.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// The request body could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] JsonRejection),
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
            GatewayError::InvalidRequest(rejection) => rejection.status(),
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
