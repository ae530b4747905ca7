use figma_context_engine::{FigmaConfig, FigmaContextResult};

pub const DEFAULT_API_ADDRESS: &str = "127.0.0.1:3000";

/// Shared, read-only state for all HTTP handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Address the server binds to, e.g. "127.0.0.1:3000".
    pub api_address: String,
    /// Figma endpoint and credential, read once at startup.
    pub figma: FigmaConfig,
}

impl AppState {
    /// Load shared state from environment variables.
    ///
    /// A missing Figma token is not an error here: the server still starts
    /// (demo page, health) and each request reports the configuration error.
    pub fn from_env() -> FigmaContextResult<Self> {
        Ok(Self {
            api_address: std::env::var("API_ADDRESS")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_ADDRESS.into()),
            figma: FigmaConfig::from_env()?,
        })
    }

    pub fn new(api_address: impl Into<String>, figma: FigmaConfig) -> Self {
        Self {
            api_address: api_address.into(),
            figma,
        }
    }
}
