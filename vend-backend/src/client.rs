//! Route-level client for the vending-machine backend.

use std::sync::Arc;

use hyper::body::Bytes;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{HeaderMap, Method};
use serde::Serialize;
use vend_core::{Denominations, Item, VendItemRequest};

use crate::{
    BackendConfig, BackendError, BackendOutcome, BackendResponse, HyperTransport, LoggingTransport,
    OutboundRequest, Transport,
};

pub const TOTAL_ITEMS_PATH: &str = "total-items";
pub const GET_ITEM_PATH: &str = "get-item";
pub const INITIALIZE_PATH: &str = "initialize";
pub const ADD_CHANGE_PATH: &str = "add-change";
pub const VEND_ITEMS_PATH: &str = "vend-items";

/// Calls the backend routes relative to a configured base URL.
///
/// Cheap to share behind an `Arc`; the underlying transport pools
/// connections and holds no per-request state.
#[derive(Clone)]
pub struct BackendClient {
    config: BackendConfig,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for BackendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl BackendClient {
    /// Client over a pooled hyper transport with request/response logging.
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self::with_transport(config, LoggingTransport::new(HyperTransport::new()))
    }

    /// Client over a caller-supplied transport.
    #[must_use]
    pub fn with_transport(config: BackendConfig, transport: impl Transport + 'static) -> Self {
        Self { config, transport: Arc::new(transport) }
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Send one request to `path` under the base URL.
    ///
    /// `Content-Type: application/json` is set on every request.
    ///
    /// # Errors
    /// Returns [`BackendError::Status`] carrying the backend's status and body
    /// when it answers 4xx/5xx, [`BackendError::Transport`] when no response
    /// arrives, and [`BackendError::InvalidBaseUrl`] if `path` does not join.
    pub async fn exchange(
        &self,
        method: Method,
        path: &str,
        body: Bytes,
    ) -> Result<BackendResponse, BackendError> {
        let uri = self.config.endpoint(path)?;
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let resp = self.transport.send(OutboundRequest { method, uri, headers, body }).await?;

        if resp.status.is_client_error() || resp.status.is_server_error() {
            let content_type = resp.content_type().cloned();
            return Err(BackendError::Status { status: resp.status, content_type, body: resp.body });
        }
        Ok(resp)
    }

    async fn exchange_json<P>(
        &self,
        method: Method,
        path: &str,
        payload: &P,
    ) -> Result<BackendResponse, BackendError>
    where
        P: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload)?;
        self.exchange(method, path, Bytes::from(body)).await
    }

    /// `GET {base}/total-items`.
    ///
    /// # Errors
    /// See [`BackendClient::exchange`].
    pub async fn total_items(&self) -> Result<BackendResponse, BackendError> {
        self.exchange(Method::GET, TOTAL_ITEMS_PATH, Bytes::new()).await
    }

    /// `GET {base}/get-item`.
    ///
    /// # Errors
    /// See [`BackendClient::exchange`].
    pub async fn get_item(&self) -> Result<BackendResponse, BackendError> {
        self.exchange(Method::GET, GET_ITEM_PATH, Bytes::new()).await
    }

    /// `POST {base}/initialize` with the catalogue.
    ///
    /// # Errors
    /// See [`BackendClient::exchange`]; also [`BackendError::Encode`].
    pub async fn initialize(&self, items: &[Item]) -> Result<BackendResponse, BackendError> {
        self.exchange_json(Method::POST, INITIALIZE_PATH, items).await
    }

    /// `POST {base}/add-change` with the denominations being loaded.
    ///
    /// # Errors
    /// See [`BackendClient::exchange`]; also [`BackendError::Encode`].
    pub async fn add_change(
        &self,
        denominations: &Denominations,
    ) -> Result<BackendResponse, BackendError> {
        self.exchange_json(Method::POST, ADD_CHANGE_PATH, denominations).await
    }

    /// `PUT {base}/vend-items`, classified into a [`BackendOutcome`].
    ///
    /// # Errors
    /// Only failures that produced no backend response: transport, encoding
    /// and URL errors. Backend error statuses are folded into the outcome.
    pub async fn vend_items(
        &self,
        requests: &[VendItemRequest],
    ) -> Result<BackendOutcome, BackendError> {
        BackendOutcome::classify(self.exchange_json(Method::PUT, VEND_ITEMS_PATH, requests).await)
    }
}
