use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as RespJson, Response},
};
use thiserror::Error;

use crate::model::envelope::Envelope;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Faults that escape a handler. Missing records are not errors; they are
/// answered with a failure envelope and a 200.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => {
                tracing::warn!(%message, "rejected request");
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error.".to_string())
            }
        };

        (status, RespJson(Envelope::<()>::failure(message))).into_response()
    }
}
