use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};
use figma_context_engine::run_enumerate;
use tracing::instrument;

use crate::{
    core::{app_state::AppState, http::response_envelope::ok},
    error_handler::AppResult,
    routes::trace_request_id,
};

#[instrument(name = "list_components_route", skip(state, headers))]
pub async fn list_components_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(file_key): Path<String>,
) -> AppResult<Response> {
    trace_request_id(&headers);

    let listing = run_enumerate(&state.figma, &file_key).await?;
    Ok(ok(listing))
}
