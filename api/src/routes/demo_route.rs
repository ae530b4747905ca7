use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serves the embedded demo page.
pub async fn demo_page() -> Html<&'static str> {
    Html(INDEX_HTML)
}
