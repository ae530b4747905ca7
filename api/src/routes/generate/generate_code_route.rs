use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::HeaderMap,
    response::Response,
};
use figma_context_engine::{GenerateRequest, run_generate};
use tracing::instrument;

use crate::{
    core::{app_state::AppState, http::response_envelope::ok},
    error_handler::AppResult,
    routes::trace_request_id,
};

/// `POST /api/generate`: render HTML or a React component for a named node.
///
/// `target` defaults to `html`; `document: true` wraps HTML in a full page.
#[instrument(
    name = "generate_code_route",
    skip(state, headers, body),
    fields(
        file_key = %body.node.file_key,
        node = %body.node.node_name,
        target = %body.target
    )
)]
pub async fn generate_code_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<GenerateRequest>,
) -> AppResult<Response> {
    trace_request_id(&headers);

    let generated = run_generate(&state.figma, &body).await?;
    Ok(ok(generated))
}
