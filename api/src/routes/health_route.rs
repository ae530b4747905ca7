use std::sync::Arc;

use axum::{extract::State, response::Response};
use serde::Serialize;

use crate::core::{app_state::AppState, http::response_envelope::ok};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: &'static str,
    pub figma_token_configured: bool,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Response {
    ok(HealthStatus {
        status: "ok",
        figma_token_configured: state.figma.has_token(),
    })
}
