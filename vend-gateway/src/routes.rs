//! Axum route handlers for the vending-machine gateway.

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, State},
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, warn};
use vend_backend::{BackendClient, BackendOutcome, BackendResponse};
use vend_core::{Denominations, Item, VendItemRequest};

use crate::error::GatewayError;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router forwarding to the given backend client.
pub fn create_router(backend: BackendClient) -> Router {
    Router::new()
        .route("/rest/totalItem", get(total_item))
        .route("/rest/getItem", get(get_item))
        .route("/rest/initialize", post(initialize))
        .route("/rest/Change", post(add_change))
        .route("/rest/vendItem", put(vend_item))
        .route("/health", get(health))
        .with_state(backend)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /rest/totalItem` — relay `GET {base}/total-items`.
///
/// # Errors
/// Returns [`GatewayError::Backend`] on any backend failure.
pub async fn total_item(State(backend): State<BackendClient>) -> Result<Response, GatewayError> {
    let resp = backend.total_items().await?;
    Ok(relay_body(resp))
}

/// `GET /rest/getItem` — relay `GET {base}/get-item`.
///
/// # Errors
/// Returns [`GatewayError::Backend`] on any backend failure.
pub async fn get_item(State(backend): State<BackendClient>) -> Result<Response, GatewayError> {
    let resp = backend.get_item().await?;
    Ok(relay_body(resp))
}

/// `POST /rest/initialize` — forward the catalogue to `{base}/initialize`.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for an undecodable body and
/// [`GatewayError::Backend`] on any backend failure.
pub async fn initialize(
    State(backend): State<BackendClient>,
    payload: Result<Json<Vec<Item>>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(items) = payload?;
    debug!(items = items.len(), "initializing catalogue");
    let resp = backend.initialize(&items).await?;
    Ok(relay_body(resp))
}

/// `POST /rest/Change` — forward denominations to `{base}/add-change`.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for an undecodable body and
/// [`GatewayError::Backend`] on any backend failure.
pub async fn add_change(
    State(backend): State<BackendClient>,
    payload: Result<Json<Denominations>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(denominations) = payload?;
    debug!(
        entries = denominations.len(),
        total = denominations.total_value(),
        "adding change"
    );
    let resp = backend.add_change(&denominations).await?;
    Ok(relay_body(resp))
}

/// `PUT /rest/vendItem` — forward to `{base}/vend-items` and map the outcome.
///
/// The backend's status and body are relayed for successes and for
/// unclassified error statuses. Item-not-found and out-of-stock become an
/// empty 404; insufficient or unreturnable balance become an empty 400.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for an undecodable body and
/// [`GatewayError::Backend`] when the backend could not be reached.
pub async fn vend_item(
    State(backend): State<BackendClient>,
    payload: Result<Json<Vec<VendItemRequest>>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(requests) = payload?;
    let outcome = backend.vend_items(&requests).await?;
    Ok(vend_response(outcome))
}

// ── Response mapping ──────────────────────────────────────────────────────────

/// Map a vend outcome onto the caller's response.
#[must_use]
pub fn vend_response(outcome: BackendOutcome) -> Response {
    match outcome {
        BackendOutcome::Success { status, content_type, body }
        | BackendOutcome::ClientError { status, content_type, body } => {
            relay(status, content_type, body)
        }
        BackendOutcome::DomainError(kind) if kind.is_not_found_class() => {
            debug!(%kind, "vend rejected");
            StatusCode::NOT_FOUND.into_response()
        }
        BackendOutcome::DomainError(kind) if kind.is_balance_class() => {
            debug!(%kind, "vend rejected");
            StatusCode::BAD_REQUEST.into_response()
        }
        BackendOutcome::DomainError(kind) => {
            warn!(%kind, "unmapped vend failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Non-vend routes answer 200 with the backend body.
fn relay_body(resp: BackendResponse) -> Response {
    let content_type = resp.content_type().cloned();
    relay(StatusCode::OK, content_type, resp.body)
}

/// Empty bodies without a backend content type go out without one.
fn relay(status: StatusCode, content_type: Option<HeaderValue>, body: Bytes) -> Response {
    let content_type = match content_type {
        Some(ct) => ct,
        None if body.is_empty() => return status.into_response(),
        None => HeaderValue::from_static("application/json"),
    };
    (status, [(CONTENT_TYPE, content_type)], body).into_response()
}
