use axum::{
    Router,
    routing::get,
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Json, Path,
    },
    response::Json as RespJson,
};

use crate::error::ApiError;
use crate::model::envelope::Envelope;
use crate::model::user::{CreateUserRequest, UpdateUserRequest, User};
use crate::AppState;

pub(crate) const NOT_FOUND: &str = "User not found.";

pub fn users_router() -> Router {
    Router::new()
        .route("/user", get(list_users).post(create_user))
        .route("/user/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Unwraps a JSON body, turning axum's rejection into an enveloped 400.
pub(crate) fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn user_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

async fn create_user(
    Extension(state): Extension<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<RespJson<Envelope<User>>, ApiError> {
    let request = json_body(body)?;
    let user = state.store.create(&request.name).await?;

    tracing::info!(id = user.id, "user created");
    Ok(RespJson(Envelope::ok("User created.", user)))
}

async fn list_users(
    Extension(state): Extension<AppState>,
) -> Result<RespJson<Envelope<Vec<User>>>, ApiError> {
    let users = state.store.list_all().await?;

    // An empty table is reported as a failed query.
    if users.is_empty() {
        tracing::info!("user table is empty");
        return Ok(RespJson(Envelope::failure("No users found.")));
    }

    tracing::info!(count = users.len(), "listed users");
    Ok(RespJson(Envelope::ok("Query succeeded.", users)))
}

async fn get_user(
    Extension(state): Extension<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<RespJson<Envelope<User>>, ApiError> {
    let id = user_id(id)?;

    match state.store.get_by_id(id).await? {
        Some(user) => Ok(RespJson(Envelope::ok("User found.", user))),
        None => {
            tracing::warn!(id, "user not found");
            Ok(RespJson(Envelope::failure(NOT_FOUND)))
        }
    }
}

async fn update_user(
    Extension(state): Extension<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<RespJson<Envelope<()>>, ApiError> {
    let id = user_id(id)?;
    let request = json_body(body)?;

    if !state.store.update(id, &request.name).await? {
        tracing::warn!(id, "update of unknown user");
        return Ok(RespJson(Envelope::failure(NOT_FOUND)));
    }

    tracing::info!(id, "user updated");
    Ok(RespJson(Envelope::done("User updated.")))
}

async fn delete_user(
    Extension(state): Extension<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<RespJson<Envelope<()>>, ApiError> {
    let id = user_id(id)?;

    if !state.store.delete(id).await? {
        tracing::warn!(id, "delete of unknown user");
        return Ok(RespJson(Envelope::failure(NOT_FOUND)));
    }

    tracing::info!(id, "user deleted");
    Ok(RespJson(Envelope::done("User deleted.")))
}
