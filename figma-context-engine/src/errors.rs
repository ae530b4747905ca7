//! Crate-wide error hierarchy for figma-context-engine.
//!
//! Callers must be able to tell apart four outcomes: bad configuration, a bad
//! request, an upstream failure and a node that simply is not in the file.
//! [`FigmaContextError::kind`] exposes that split without matching on
//! nested variants.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type FigmaContextResult<T> = Result<T, FigmaContextError>;

/// Root error type for the figma-context-engine crate.
#[derive(Debug, Error)]
pub enum FigmaContextError {
    /// Configuration problems (missing token, bad base URL, bad numbers).
    #[error(transparent)]
    Config(#[from] FigmaConfigError),

    /// Required request parameter missing or blank.
    #[error("invalid request: `{field}` {reason}")]
    InvalidRequest {
        field: &'static str,
        reason: &'static str,
    },

    /// Transport or API failure while fetching the file.
    #[error(transparent)]
    Upstream(#[from] FigmaUpstreamError),

    /// The file was fetched but contains no node with this name.
    #[error("node `{name}` not found in file `{file_key}`")]
    NodeNotFound { file_key: String, name: String },
}

/// Coarse classification of [`FigmaContextError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    InvalidRequest,
    Upstream,
    NotFound,
}

impl FigmaContextError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FigmaContextError::Config(_) => ErrorKind::Config,
            FigmaContextError::InvalidRequest { .. } => ErrorKind::InvalidRequest,
            FigmaContextError::Upstream(_) => ErrorKind::Upstream,
            FigmaContextError::NodeNotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub(crate) fn missing(field: &'static str) -> Self {
        FigmaContextError::InvalidRequest {
            field,
            reason: "is required",
        }
    }
}

/// Configuration and setup errors.
#[derive(Debug, Error)]
pub enum FigmaConfigError {
    /// No Figma access token configured.
    #[error("missing Figma access token (set FIGMA_TOKEN)")]
    MissingToken,

    /// Invalid base API URL.
    #[error("invalid Figma API base url: {0}")]
    InvalidBaseUrl(String),

    /// A number failed to parse (timeouts).
    #[error("invalid number in {var}: {reason}")]
    InvalidNumber {
        var: &'static str,
        reason: &'static str,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

/// Errors reported while talking to the Figma REST API.
#[derive(Debug, Error)]
pub enum FigmaUpstreamError {
    /// Non-2xx response. `message` carries Figma's `err` text when present.
    #[error("Figma API returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Timeout at transport level.
    #[error("timeout while calling the Figma API")]
    Timeout,

    /// Network/transport failure without HTTP status (DNS/connect/reset).
    #[error("network error: {0}")]
    Network(String),

    /// Response body did not decode as a Figma file.
    #[error("invalid Figma response: {0}")]
    InvalidResponse(String),
}

impl FigmaUpstreamError {
    /// HTTP status reported by Figma, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            FigmaUpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ===== Conversions for `?` ergonomics at the crate root =====

impl From<reqwest::Error> for FigmaContextError {
    fn from(e: reqwest::Error) -> Self {
        FigmaContextError::Upstream(FigmaUpstreamError::from(e))
    }
}

impl From<reqwest::Error> for FigmaUpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return FigmaUpstreamError::Timeout;
        }
        if e.is_decode() {
            return FigmaUpstreamError::InvalidResponse(e.to_string());
        }
        if let Some(status) = e.status() {
            return FigmaUpstreamError::Status {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            };
        }
        FigmaUpstreamError::Network(e.to_string())
    }
}
