//! Request/response logging decorator for backend calls.

use std::time::Instant;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::{BackendError, BackendResponse, OutboundRequest, Transport};

/// Wraps a [`Transport`] and logs every exchange that passes through it.
///
/// The request (method, URL, headers, body) is logged at `info` before it is
/// handed to the inner transport, and the response (status, headers, body)
/// after it returns. The inner result is returned untouched,
/// errors included.
#[derive(Debug, Clone, Default)]
pub struct LoggingTransport<T> {
    inner: T,
}

impl<T: Transport> LoggingTransport<T> {
    #[must_use]
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[async_trait]
impl<T: Transport> Transport for LoggingTransport<T> {
    async fn send(&self, request: OutboundRequest) -> Result<BackendResponse, BackendError> {
        let method = request.method.clone();
        let uri = request.uri.clone();

        info!(
            method = %method,
            uri = %uri,
            headers = ?request.headers,
            body = %String::from_utf8_lossy(&request.body),
            "backend request"
        );

        let start = Instant::now();
        let result = self.inner.send(request).await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(resp) => {
                info!(
                    method = %method,
                    uri = %uri,
                    status = resp.status.as_u16(),
                    elapsed_ms,
                    headers = ?resp.headers,
                    body = %String::from_utf8_lossy(&resp.body),
                    "backend response"
                );
            }
            Err(e) => {
                warn!(method = %method, uri = %uri, elapsed_ms, error = %e, "backend request failed");
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use hyper::body::Bytes;
    use hyper::header::{HeaderValue, CONTENT_TYPE};
    use hyper::{HeaderMap, Method, StatusCode, Uri};
    use tracing_test::traced_test;

    /// Records the last request and replays a fixed result.
    struct StubTransport {
        seen: Mutex<Option<OutboundRequest>>,
        reply: Result<BackendResponse, String>,
    }

    impl StubTransport {
        fn replying(reply: Result<BackendResponse, String>) -> Self {
            Self { seen: Mutex::new(None), reply }
        }

        fn seen(&self) -> Option<OutboundRequest> {
            match self.seen.lock() {
                Ok(g) => g.clone(),
                Err(e) => panic!("stub lock poisoned: {e}"),
            }
        }
    }

    #[async_trait]
    impl Transport for StubTransport {
        async fn send(&self, request: OutboundRequest) -> Result<BackendResponse, BackendError> {
            match self.seen.lock() {
                Ok(mut g) => *g = Some(request),
                Err(e) => panic!("stub lock poisoned: {e}"),
            }
            self.reply.clone().map_err(BackendError::Transport)
        }
    }

    fn vend_request() -> OutboundRequest {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        OutboundRequest {
            method: Method::PUT,
            uri: Uri::from_static("http://localhost:8080/vending-machine/vend-items"),
            headers,
            body: Bytes::from_static(br#"[{"itemId":1,"amount":1.0,"quantity":1}]"#),
        }
    }

    fn ok_response() -> BackendResponse {
        BackendResponse {
            status: StatusCode::CREATED,
            headers: HeaderMap::new(),
            body: Bytes::from_static(br#"{"status":"success"}"#),
        }
    }

    #[tokio::test]
    #[traced_test]
    async fn request_and_response_pass_through_unchanged() {
        let logged = LoggingTransport::new(StubTransport::replying(Ok(ok_response())));

        let resp = match logged.send(vend_request()).await {
            Ok(r) => r,
            Err(e) => panic!("unexpected error: {e}"),
        };

        assert_eq!(resp, ok_response(), "response must not be altered");
        let inner = logged.into_inner();
        assert_eq!(inner.seen(), Some(vend_request()), "request must not be altered");
        assert!(logs_contain("backend request"));
        assert!(logs_contain("status=201"));
    }

    #[tokio::test]
    #[traced_test]
    async fn payloads_are_logged_at_info() {
        let logged = LoggingTransport::new(StubTransport::replying(Ok(ok_response())));

        if let Err(e) = logged.send(vend_request()).await {
            panic!("unexpected error: {e}");
        }

        logs_assert(|lines: &[&str]| {
            let info_with = |needle: &str| {
                lines.iter().any(|l| l.contains(" INFO ") && l.contains(needle))
            };
            if !info_with("\"itemId\":1") {
                return Err("request body not logged at info".to_owned());
            }
            if !info_with("application/json") {
                return Err("request headers not logged at info".to_owned());
            }
            if !info_with("\"status\":\"success\"") {
                return Err("response body not logged at info".to_owned());
            }
            Ok(())
        });
    }

    #[tokio::test]
    #[traced_test]
    async fn transport_errors_are_not_converted() {
        let logged = LoggingTransport::new(StubTransport::replying(Err("refused".to_owned())));

        let result = logged.send(vend_request()).await;

        match result {
            Err(BackendError::Transport(msg)) => assert_eq!(msg, "refused"),
            other => panic!("expected transport error, got {other:?}"),
        }
        assert!(logs_contain("backend request failed"));
    }
}
