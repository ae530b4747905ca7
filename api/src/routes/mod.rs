pub mod components;
pub mod demo_route;
pub mod generate;
pub mod health_route;
pub mod inspect;
pub mod tools;

use axum::http::HeaderMap;
use tracing::debug;

/// Logs the caller-supplied `X-Request-Id`, if any.
pub(crate) fn trace_request_id(headers: &HeaderMap) {
    if let Some(id) = headers.get("X-Request-Id").and_then(|h| h.to_str().ok()) {
        debug!(%id, "request id attached");
    }
}
