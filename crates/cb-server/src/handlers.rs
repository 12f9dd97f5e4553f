//! Comment endpoint handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cb_core::comment::{Comment, CommentBody};
use cb_core::types::CommentId;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::router::AppState;

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /comments
pub async fn list_comments(State(state): State<AppState>) -> Result<Json<Vec<Comment>>, AppError> {
    Ok(Json(state.store.get_all().await?))
}

/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    body: Result<Json<CommentBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let Json(body) = body?;
    let comment = state.store.create(&body.text).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// PUT /comments/:id
pub async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CommentBody>, JsonRejection>,
) -> Result<Json<Comment>, AppError> {
    // Unknown ids win over a malformed body
    let id = parse_id(&id)?;
    let Json(body) = body?;
    Ok(Json(state.store.update(id, &body.text).await?))
}

/// DELETE /comments/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// An id that is not an integer can never name a comment.
fn parse_id(raw: &str) -> Result<CommentId, AppError> {
    raw.parse().map_err(|_| AppError::NotFound)
}
