use axum::response::Response;

use crate::{core::http::response_envelope::ok, routes::tools::tool_catalog::catalog};

/// `GET /tools`
pub async fn list_tools_route() -> Response {
    ok(catalog())
}
