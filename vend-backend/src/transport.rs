//! Transport abstraction for backend calls.
//!
//! The client builds [`OutboundRequest`]s and hands them to a [`Transport`].
//! Decorators such as [`crate::LoggingTransport`] wrap another transport
//! and are composed when the client is constructed.

use async_trait::async_trait;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{HeaderMap, Method, StatusCode, Uri};

use crate::BackendError;

/// A fully built request to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// A backend response with its body fully read.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl BackendResponse {
    #[must_use]
    pub fn content_type(&self) -> Option<&HeaderValue> {
        self.headers.get(CONTENT_TYPE)
    }

    /// Body decoded as UTF-8, lossily.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request to the backend.
///
/// Implementations must be `Send + Sync`; a single transport is shared by
/// every in-flight request.
///
/// # Cancel Safety
/// Cancel safe. Dropping the future abandons the request; no state is kept
/// between calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `request` and read the whole response.
    ///
    /// Every HTTP response is returned as `Ok`, whatever its status.
    ///
    /// # Errors
    /// Returns [`BackendError::Transport`] when no response could be obtained.
    async fn send(&self, request: OutboundRequest) -> Result<BackendResponse, BackendError>;
}
