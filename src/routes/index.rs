use axum::{Router, routing::get, response::Html};

const INDEX_HTML: &str = include_str!("index.html");

// Endpoint reference page with a small form per endpoint.
pub fn index_router() -> Router {
    Router::new().route("/", get(|| async { Html(INDEX_HTML) }))
}
