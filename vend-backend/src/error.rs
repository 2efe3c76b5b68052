//! Error types for the backend crate.

use hyper::body::Bytes;
use hyper::header::HeaderValue;
use hyper::StatusCode;

/// Errors that can occur while calling the vending-machine backend.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BackendError {
    /// The configured base URL is unusable.
    #[error("invalid backend base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The backend answered with a 4xx or 5xx status.
    #[error("backend returned HTTP {status}")]
    Status {
        status: StatusCode,
        content_type: Option<HeaderValue>,
        body: Bytes,
    },

    /// Connection, protocol or body read failure.
    #[error("backend request failed: {0}")]
    Transport(String),

    /// The outbound payload could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl BackendError {
    /// Status code of a [`BackendError::Status`] error.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of a [`BackendError::Status`] error, decoded lossily.
    #[must_use]
    pub fn response_body_text(&self) -> Option<String> {
        match self {
            Self::Status { body, .. } => Some(String::from_utf8_lossy(body).into_owned()),
            _ => None,
        }
    }
}
