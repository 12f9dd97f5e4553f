//! HTTP error mapping

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cb_core::error::BoardError;
use serde::Serialize;
use tracing::warn;

const NOT_FOUND_MESSAGE: &str = "Comment not found";

/// Error body, `{"message": ...}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

/// Error returned by handlers
#[derive(Debug)]
pub enum AppError {
    /// Unknown or unparseable comment id
    NotFound,
    /// Request body could not be read as a comment
    Rejected(StatusCode, String),
    /// Store failure
    Internal(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<BoardError> for AppError {
    fn from(err: BoardError) -> Self {
        if err.is_not_found() {
            AppError::NotFound
        } else {
            AppError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE.to_string()),
            AppError::Rejected(status, message) => (status, message),
            AppError::Internal(message) => {
                warn!("Request failed: {}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}
