use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::HeaderMap,
    response::Response,
};
use figma_context_engine::{NodeRequest, run_inspect};
use tracing::instrument;

use crate::{
    core::{app_state::AppState, http::response_envelope::ok},
    error_handler::AppResult,
    routes::trace_request_id,
};

/// `POST /api/inspect`: locate a node by name and return its style record.
#[instrument(
    name = "inspect_node_route",
    skip(state, headers, body),
    fields(file_key = %body.file_key, node = %body.node_name)
)]
pub async fn inspect_node_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<NodeRequest>,
) -> AppResult<Response> {
    trace_request_id(&headers);

    let report = run_inspect(&state.figma, &body).await?;
    Ok(ok(report))
}
