use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::HeaderMap,
    response::Response,
};
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::response_envelope::ok},
    error_handler::{AppError, AppResult},
    routes::{
        tools::tool_catalog::{ToolCallRequest, dispatch, is_known},
        trace_request_id,
    },
};

/// `POST /tools/call`
///
/// A malformed call (blank or unknown tool name) is an HTTP error. Anything
/// that goes wrong while running a known tool comes back as `isError: true`.
#[instrument(name = "call_tool_route", skip(state, headers, body), fields(tool = %body.name))]
pub async fn call_tool_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<ToolCallRequest>,
) -> AppResult<Response> {
    trace_request_id(&headers);

    let name = body.name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("tool `name` is required".into()));
    }
    if !is_known(name) {
        return Err(AppError::UnknownTool(name.to_string()));
    }

    let result = dispatch(&state.figma, name, body.arguments).await;
    info!(is_error = result.is_error, "tool call finished");
    Ok(ok(result))
}
