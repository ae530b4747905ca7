use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use figma_context_engine::{ErrorKind, FigmaContextError};
use thiserror::Error;
use tracing::{error, warn};

use crate::core::http::response_envelope::{ApiError, ApiErrorDetail};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("invalid configuration: {0}")]
    Startup(#[source] FigmaContextError),

    // --- IO / network / server ---
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("route not found")]
    NotFound,

    #[error("unknown tool `{0}`")]
    UnknownTool(String),

    /// Failure of a fetch/inspect/generate pipeline, mapped by error kind.
    #[error(transparent)]
    Pipeline(#[from] FigmaContextError),
}

/// HTTP status and stable code for each pipeline error kind.
pub fn pipeline_status(err: &FigmaContextError) -> (StatusCode, &'static str) {
    match err.kind() {
        ErrorKind::Config => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
        ErrorKind::InvalidRequest => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
        ErrorKind::Upstream => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NODE_NOT_FOUND"),
    }
}

/// Per-field hints for pipeline errors the client can fix.
pub fn pipeline_details(err: &FigmaContextError) -> Vec<ApiErrorDetail> {
    match err {
        FigmaContextError::InvalidRequest { field, .. } => vec![ApiErrorDetail::field(
            *field,
            "Provide a non-empty Figma file key (or file URL) and node name.",
        )],
        FigmaContextError::NodeNotFound { .. } => vec![ApiErrorDetail::field(
            "nodeName",
            "Node names are matched exactly and case-sensitively.",
        )],
        _ => Vec::new(),
    }
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Startup(_) => StatusCode::INTERNAL_SERVER_ERROR, // startup-only
            AppError::Bind { .. } | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound | AppError::UnknownTool(_) => StatusCode::NOT_FOUND,
            AppError::Pipeline(e) => pipeline_status(e).0,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::Startup(_) => "CONFIG_ERROR",
            AppError::Bind { .. } => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::NotFound => "NOT_FOUND",
            AppError::UnknownTool(_) => "UNKNOWN_TOOL",
            AppError::Pipeline(e) => pipeline_status(e).1,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            error!(%code, error = %self, "request failed");
        } else {
            warn!(%code, error = %self, "request rejected");
        }

        let details = match &self {
            AppError::Pipeline(e) => pipeline_details(e),
            AppError::UnknownTool(_) => vec![ApiErrorDetail::field(
                "name",
                "GET /tools lists the available tool names.",
            )],
            _ => Vec::new(),
        };

        ApiError::new(code, self.to_string())
            .with_details(details)
            .into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;
