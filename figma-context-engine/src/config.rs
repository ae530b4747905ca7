//! Runtime configuration loaded from environment variables.
//!
//! # Environment variables
//!
//! - `FIGMA_TOKEN` (alias `FIGMA_ACCESS_TOKEN`) = personal access token.
//!   Optional at load time; its absence surfaces as
//!   [`FigmaConfigError::MissingToken`] when a fetch is attempted.
//! - `FIGMA_API_BASE`     = API base URL, default `https://api.figma.com/v1`
//! - `FIGMA_TIMEOUT_SECS` = request timeout in seconds, default 30

use std::fmt;

use crate::errors::{FigmaConfigError, FigmaContextResult};

pub const DEFAULT_API_BASE: &str = "https://api.figma.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Credential and endpoint settings, read once at startup and passed
/// explicitly into every pipeline call.
#[derive(Clone)]
pub struct FigmaConfig {
    /// API base without trailing slash, e.g. "https://api.figma.com/v1".
    pub api_base: String,
    /// Personal access token sent as `X-Figma-Token`.
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl FigmaConfig {
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.trim().is_empty()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Build from environment variables with defaults.
    ///
    /// # Errors
    /// - [`FigmaConfigError::InvalidBaseUrl`] if `FIGMA_API_BASE` is not http(s)
    /// - [`FigmaConfigError::InvalidNumber`] if `FIGMA_TIMEOUT_SECS` is not a u64
    pub fn from_env() -> FigmaContextResult<Self> {
        let api_base = env_or("FIGMA_API_BASE", DEFAULT_API_BASE);
        validate_http_endpoint(&api_base)?;

        let token = env_opt("FIGMA_TOKEN").or_else(|| env_opt("FIGMA_ACCESS_TOKEN"));
        let timeout_secs = env_opt_u64("FIGMA_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            timeout_secs,
            ..Self::new(api_base, token)
        })
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// The configured token.
    ///
    /// # Errors
    /// [`FigmaConfigError::MissingToken`] when none is configured.
    pub fn require_token(&self) -> Result<&str, FigmaConfigError> {
        self.token.as_deref().ok_or(FigmaConfigError::MissingToken)
    }
}

impl fmt::Debug for FigmaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigmaConfig")
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
pub fn validate_http_endpoint(value: &str) -> Result<(), FigmaConfigError> {
    let v = value.trim();
    if v.starts_with("http://") || v.starts_with("https://") {
        Ok(())
    } else {
        Err(FigmaConfigError::InvalidBaseUrl(value.to_string()))
    }
}

fn env_or(name: &str, default: &str) -> String {
    env_opt(name).unwrap_or_else(|| default.to_string())
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_opt_u64(name: &'static str) -> Result<Option<u64>, FigmaConfigError> {
    match env_opt(name) {
        Some(v) => v
            .parse::<u64>()
            .map(Some)
            .map_err(|_| FigmaConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            }),
        None => Ok(None),
    }
}
