//! Figma REST client.
//!
//! Endpoints used:
//!   * GET /v1/files/:key

pub mod types;
pub use types::FigmaFile;

use std::{fmt, time::Duration};

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    config::{FigmaConfig, validate_http_endpoint},
    errors::{FigmaConfigError, FigmaContextResult, FigmaUpstreamError},
    figma_api::types::FigmaErrorBody,
};

const SNIPPET_LEN: usize = 240;

/// Figma HTTP client wrapper. One instance per request; nothing is cached.
#[derive(Clone)]
pub struct FigmaClient {
    http: Client,
    api_base: String,
    token: String,
}

impl FigmaClient {
    /// Builds a client from configuration.
    ///
    /// Fails before any network activity when the token is missing or the
    /// base URL is not http(s).
    pub fn from_config(cfg: &FigmaConfig) -> FigmaContextResult<Self> {
        let token = cfg.require_token()?.to_string();
        validate_http_endpoint(&cfg.api_base)?;

        debug!(api_base = %cfg.api_base, timeout_secs = cfg.timeout_secs, "creating FigmaClient");

        let http = Client::builder()
            .user_agent("figma-context-engine/0.1")
            .timeout(Duration::from_secs(cfg.timeout_secs.max(1)))
            .gzip(true)
            .build()
            .map_err(|e| FigmaConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Fetches the full document tree of a file.
    #[instrument(skip(self), fields(api_base = %self.api_base))]
    pub async fn fetch_file(&self, file_key: &str) -> FigmaContextResult<FigmaFile> {
        let url = format!("{}/files/{}", self.api_base, urlencoding::encode(file_key));
        debug!("GET {}", url);

        let resp = self
            .http
            .get(&url)
            .header("X-Figma-Token", &self.token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<FigmaErrorBody>(&text)
                .ok()
                .and_then(FigmaErrorBody::detail)
                .or_else(|| snippet(&text))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Figma API request failed")
                        .to_string()
                });
            warn!(status = status.as_u16(), %message, "Figma API request failed");
            return Err(FigmaUpstreamError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body = resp.bytes().await?;
        let file = decode_file(&body)?;

        debug!(file = %file.name, "file fetched");
        Ok(file)
    }
}

impl fmt::Debug for FigmaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigmaClient")
            .field("api_base", &self.api_base)
            .finish_non_exhaustive()
    }
}

/// Decodes a file body of any nesting depth.
///
/// serde_json stops at 128 levels by default, which is only 63 node levels
/// (object plus `children` array per node). The limit is lifted and the stack
/// grows on demand instead.
pub fn decode_file(body: &[u8]) -> Result<FigmaFile, FigmaUpstreamError> {
    let invalid = |e: serde_json::Error| FigmaUpstreamError::InvalidResponse(e.to_string());

    let mut de = serde_json::Deserializer::from_slice(body);
    de.disable_recursion_limit();
    let file = FigmaFile::deserialize(serde_stacker::Deserializer::new(&mut de)).map_err(invalid)?;
    de.end().map_err(invalid)?;
    Ok(file)
}

fn snippet(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(SNIPPET_LEN).collect())
    }
}

/// Accepts a bare file key or a Figma URL and returns the key.
///
/// `https://www.figma.com/file/AbC123/My-File?node-id=1-2` and
/// `https://www.figma.com/design/AbC123/...` both yield `AbC123`.
pub fn parse_file_key(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if !input.contains("://") {
        return Some(input.to_string());
    }

    let path = input
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(input)
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let mut segments = path.split('/').skip(1);
    while let Some(seg) = segments.next() {
        if matches!(seg, "file" | "design" | "proto" | "board") {
            return segments
                .next()
                .filter(|k| !k.is_empty())
                .map(str::to_string);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::Path,
        http::{HeaderMap, StatusCode},
        response::IntoResponse,
        routing::get,
    };
    use serde_json::json;

    use crate::errors::FigmaContextError;

    async fn file_route(Path(key): Path<String>, headers: HeaderMap) -> axum::response::Response {
        if headers.get("X-Figma-Token").and_then(|v| v.to_str().ok()) != Some("good-token") {
            return (
                StatusCode::FORBIDDEN,
                Json(json!({ "status": 403, "err": "Invalid token" })),
            )
                .into_response();
        }
        match key.as_str() {
            "FILE1" => Json(json!({
                "name": "Design System",
                "lastModified": "2024-01-01T00:00:00Z",
                "version": "42",
                "document": { "id": "0:0", "name": "Document", "type": "DOCUMENT" }
            }))
            .into_response(),
            "DEEP" => (StatusCode::OK, nested_file(DEEP_LEVELS)).into_response(),
            "BROKEN" => (StatusCode::OK, "not json").into_response(),
            "PLAIN" => (StatusCode::INTERNAL_SERVER_ERROR, "").into_response(),
            _ => (
                StatusCode::NOT_FOUND,
                Json(json!({ "status": 404, "err": "Not found" })),
            )
                .into_response(),
        }
    }

    const DEEP_LEVELS: usize = 150;

    /// A file whose document is `levels` nested FRAMEs ending in a TEXT leaf.
    fn nested_file(levels: usize) -> String {
        let mut node = r#"{"id":"leaf","name":"Deep Label","type":"TEXT","characters":"hi"}"#.to_string();
        for i in (0..levels).rev() {
            node = format!(r#"{{"id":"{i}","name":"Frame {i}","type":"FRAME","children":[{node}]}}"#);
        }
        format!(r#"{{"name":"Deep","document":{node}}}"#)
    }

    async fn spawn_fake_figma() -> String {
        let app = Router::new().route("/v1/files/{key}", get(file_route));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/v1")
    }

    fn client(base: &str, token: &str) -> FigmaClient {
        FigmaClient::from_config(&FigmaConfig::new(base, Some(token.into()))).unwrap()
    }

    #[test]
    fn missing_token_fails_before_network() {
        let cfg = FigmaConfig::new("http://127.0.0.1:9", None);
        let err = FigmaClient::from_config(&cfg).unwrap_err();
        assert!(matches!(
            err,
            FigmaContextError::Config(FigmaConfigError::MissingToken)
        ));
    }

    #[test]
    fn non_http_base_is_rejected() {
        let cfg = FigmaConfig::new("api.figma.com", Some("t".into()));
        assert!(matches!(
            FigmaClient::from_config(&cfg),
            Err(FigmaContextError::Config(FigmaConfigError::InvalidBaseUrl(_)))
        ));
    }

    #[tokio::test]
    async fn fetches_and_decodes_file() {
        let base = spawn_fake_figma().await;
        let file = client(&base, "good-token").fetch_file("FILE1").await.unwrap();
        assert_eq!(file.name, "Design System");
        assert_eq!(file.version.as_deref(), Some("42"));
        assert_eq!(file.document.name, "Document");
    }

    #[tokio::test]
    async fn upstream_error_detail_is_preserved() {
        let base = spawn_fake_figma().await;
        let err = client(&base, "bad-token").fetch_file("FILE1").await.unwrap_err();
        match err {
            FigmaContextError::Upstream(FigmaUpstreamError::Status { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "Invalid token");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_error_body_gets_generic_message() {
        let base = spawn_fake_figma().await;
        let err = client(&base, "good-token").fetch_file("PLAIN").await.unwrap_err();
        match err {
            FigmaContextError::Upstream(FigmaUpstreamError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_invalid_response() {
        let base = spawn_fake_figma().await;
        let err = client(&base, "good-token").fetch_file("BROKEN").await.unwrap_err();
        assert!(matches!(
            err,
            FigmaContextError::Upstream(FigmaUpstreamError::InvalidResponse(_))
        ));
    }

    #[test]
    fn decodes_trees_deeper_than_default_json_limit() {
        let file = decode_file(nested_file(DEEP_LEVELS).as_bytes()).unwrap();
        let leaf = design_engine::find_by_name(&file.document, "Deep Label").unwrap();
        assert_eq!(leaf.id, "leaf");
        assert_eq!(file.document.pre_order().count(), DEEP_LEVELS + 1);
    }

    #[test]
    fn trailing_garbage_is_invalid_response() {
        let err = decode_file(br#"{"name":"x","document":{}} trailing"#).unwrap_err();
        assert!(matches!(err, FigmaUpstreamError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn deep_file_is_fetched_not_rejected() {
        let base = spawn_fake_figma().await;
        let file = client(&base, "good-token").fetch_file("DEEP").await.unwrap();
        assert!(design_engine::find_by_name(&file.document, "Deep Label").is_some());
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}/v1"), "t")
            .fetch_file("FILE1")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            FigmaContextError::Upstream(FigmaUpstreamError::Network(_))
        ));
    }

    #[test]
    fn file_key_from_urls() {
        assert_eq!(parse_file_key("AbC123").as_deref(), Some("AbC123"));
        assert_eq!(
            parse_file_key("https://www.figma.com/file/AbC123/My-File?node-id=1-2").as_deref(),
            Some("AbC123")
        );
        assert_eq!(
            parse_file_key("https://www.figma.com/design/XyZ/Title").as_deref(),
            Some("XyZ")
        );
        assert_eq!(parse_file_key("https://www.figma.com/files/recent"), None);
        assert_eq!(parse_file_key("   "), None);
    }
}
