pub mod core;
pub mod error_handler;
mod middleware_layer;
mod routes;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        components::list_components_route::list_components_route,
        demo_route::demo_page,
        generate::generate_code_route::generate_code_route,
        health_route::health,
        inspect::inspect_node_route::inspect_node_route,
        tools::{call_tool_route::call_tool_route, list_tools_route::list_tools_route},
    },
};

/// Full application router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(demo_page))
        .route("/health", get(health))
        .route("/api/inspect", post(inspect_node_route))
        .route("/api/generate", post(generate_code_route))
        .route("/api/files/{file_key}/components", get(list_components_route))
        .route("/tools", get(list_tools_route))
        .route("/tools/call", post(call_tool_route))
        .fallback(|| async { AppError::NotFound })
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state)
}

/// Loads state from the environment and serves until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let state = AppState::from_env().map_err(AppError::Startup)?;
    serve(Arc::new(state)).await
}

pub async fn serve(state: Arc<AppState>) -> Result<(), AppError> {
    let addr = state.api_address.clone();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| AppError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(
        %addr,
        figma_token_configured = state.figma.has_token(),
        "figma codegen api listening"
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
