use axum::{
    body::{Body, Bytes},
    http::{HeaderValue, Request, StatusCode, header, response::Parts},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::debug;

use crate::core::http::response_envelope::{ApiError, ApiErrorDetail};

const REQUEST_ID: &str = "x-request-id";

/// Request fields worth pointing at when serde complains.
const KNOWN_FIELDS: &[&str] = &["fileKey", "nodeName", "target", "document", "arguments", "name"];

async fn take_body(res: Response) -> (Parts, Bytes) {
    let (parts, body) = res.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    (parts, bytes)
}

fn guess_path_from_serde_msg(msg: &str) -> Option<String> {
    KNOWN_FIELDS
        .iter()
        .find(|key| msg.contains(&format!("`{key}`")) || msg.contains(*key))
        .map(|key| key.to_string())
}

fn hint_from_serde_msg(msg: &str) -> Option<String> {
    if msg.contains("missing field") {
        Some("Add the missing field to the JSON body.".into())
    } else if msg.contains("unknown variant") {
        Some("`target` must be \"html\" or \"react\".".into())
    } else if msg.contains("Content-Type") {
        Some("Send the body with `Content-Type: application/json`.".into())
    } else if msg.contains("expected a map") || msg.contains("expected struct") {
        Some("Expected a JSON object here (e.g. { \"fileKey\": \"...\" }).".into())
    } else {
        None
    }
}

/// The caller's request id, or a fresh time-based one.
fn request_id(incoming: Option<String>) -> String {
    match incoming {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            let now = Utc::now();
            let nanos = now
                .timestamp_nanos_opt()
                .unwrap_or_else(|| now.timestamp_micros() * 1000);
            format!("req-{nanos}")
        }
    }
}

fn is_json(parts: &Parts) -> bool {
    parts
        .headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

/// Rewrites axum's plain-text extractor rejections (400/415/422) into the
/// JSON error envelope. Responses that are already JSON pass through.
pub async fn json_error_mapper(req: Request<Body>, next: Next) -> Response {
    let incoming_id = req
        .headers()
        .get(REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    let res = next.run(req).await;
    let status = res.status();

    if !matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::UNSUPPORTED_MEDIA_TYPE | StatusCode::UNPROCESSABLE_ENTITY
    ) {
        return res;
    }

    let (parts, bytes) = take_body(res).await;
    if is_json(&parts) {
        return Response::from_parts(parts, Body::from(bytes));
    }

    let original = String::from_utf8_lossy(&bytes);
    let rid = request_id(incoming_id);
    debug!(request_id = %rid, status = status.as_u16(), "mapping extractor rejection");

    let detail = ApiErrorDetail {
        path: guess_path_from_serde_msg(&original),
        hint: hint_from_serde_msg(&original),
    };

    let code = match status {
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
        StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY",
        _ => "BAD_REQUEST",
    };
    let mut mapped = ApiError::new(code, original.trim())
        .with_details(vec![detail])
        .into_response_with_status(status);
    if let Ok(value) = HeaderValue::from_str(&rid) {
        mapped.headers_mut().insert(REQUEST_ID, value);
    }
    mapped
}
