use axum::{
    Router,
    routing::post,
    extract::{rejection::JsonRejection, Extension, Json},
    response::Json as RespJson,
};

use super::users::{json_body, NOT_FOUND};
use crate::error::ApiError;
use crate::model::envelope::Envelope;
use crate::model::user::{SearchRequest, User};
use crate::AppState;

pub fn search_router() -> Router {
    Router::new().route("/search", post(search_users))
}

async fn search_users(
    Extension(state): Extension<AppState>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<RespJson<Envelope<Vec<User>>>, ApiError> {
    let request = json_body(body)?;
    let users = state.store.search_by_name(&request.name).await?;

    if users.is_empty() {
        tracing::info!(fragment = %request.name, "search matched nothing");
        return Ok(RespJson(Envelope::failure(NOT_FOUND)));
    }

    let count = users.len();
    tracing::info!(fragment = %request.name, count, "search matched");
    Ok(RespJson(Envelope::ok(format!("Users found: {count}"), users)))
}
