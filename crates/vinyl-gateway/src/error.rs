use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};
use vinyl_core::StorageError;

use crate::model::MessageResponse;

pub type Result<T> = std::result::Result<T, AppError>;

/// Request-scoped failures, collapsed to a fixed status and one-line
/// JSON message at the HTTP boundary. Store error detail goes to the
/// log, never to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("album not found")]
    NotFound,
    #[error("could not insert album: {0}")]
    Insert(StorageError),
    #[error("could not delete album: {0}")]
    Delete(StorageError),
    #[error("invalid album payload: {0}")]
    InvalidPayload(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "album not found"),
            AppError::Insert(err) => {
                error!(error = %err, "album insert failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "could not insert album")
            }
            AppError::Delete(err) => {
                error!(error = %err, "album delete failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "could not delete album")
            }
            AppError::InvalidPayload(rejection) => {
                warn!(error = %rejection, "rejected malformed album payload");
                (StatusCode::BAD_REQUEST, "invalid album payload")
            }
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
