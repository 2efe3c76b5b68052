//! Pooled HTTP/1.1 transport over TCP.
//!
//! Wraps the `hyper-util` legacy client, which keeps a connection pool and
//! is safe to share across tasks.

use async_trait::async_trait;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::Request;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::{BackendError, BackendResponse, OutboundRequest, Transport};

/// [`Transport`] backed by a pooled hyper client.
#[derive(Debug, Clone)]
pub struct HyperTransport {
    client: Client<HttpConnector, Full<Bytes>>,
}

impl HyperTransport {
    #[must_use]
    pub fn new() -> Self {
        let client = Client::builder(TokioExecutor::new()).build_http();
        Self { client }
    }
}

impl Default for HyperTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HyperTransport {
    async fn send(&self, request: OutboundRequest) -> Result<BackendResponse, BackendError> {
        let OutboundRequest { method, uri, headers, body } = request;

        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(h) = builder.headers_mut() {
            h.extend(headers);
        }
        let req = builder
            .body(Full::new(body))
            .map_err(|e| BackendError::Transport(format!("build request: {e}")))?;

        let resp = self
            .client
            .request(req)
            .await
            .map_err(|e| BackendError::Transport(format!("send request: {e}")))?;

        let (parts, body) = resp.into_parts();
        let body = body
            .collect()
            .await
            .map_err(|e| BackendError::Transport(format!("read response body: {e}")))?
            .to_bytes();

        Ok(BackendResponse { status: parts.status, headers: parts.headers, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use hyper::header::CONTENT_TYPE;
    use hyper::{HeaderMap, StatusCode};

    fn request(method: hyper::Method, url: &str, body: &'static str) -> OutboundRequest {
        let uri: hyper::Uri = match url.parse() {
            Ok(u) => u,
            Err(e) => panic!("bad test url: {e}"),
        };
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, hyper::header::HeaderValue::from_static("application/json"));
        OutboundRequest { method, uri, headers, body: Bytes::from_static(body.as_bytes()) }
    }

    #[tokio::test]
    async fn error_statuses_are_returned_as_responses() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT).path("/vm/vend-items").header("content-type", "application/json");
            then.status(409).body("{\"error\":\"busy\"}");
        });

        let transport = HyperTransport::new();
        let resp = match transport
            .send(request(hyper::Method::PUT, &server.url("/vm/vend-items"), "[]"))
            .await
        {
            Ok(r) => r,
            Err(e) => panic!("transport error: {e}"),
        };

        mock.assert();
        assert_eq!(resp.status, StatusCode::CONFLICT);
        assert_eq!(resp.body_text(), "{\"error\":\"busy\"}");
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let transport = HyperTransport::new();
        // Port 9 (discard) is not expected to accept connections on loopback.
        let result = transport
            .send(request(hyper::Method::GET, "http://127.0.0.1:9/vm/total-items", ""))
            .await;
        assert!(
            matches!(result, Err(BackendError::Transport(_))),
            "connection failure must surface as a transport error"
        );
    }
}
