use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use board_types::api::{MessageRequest, SuccessResponse};
use board_types::models::Message;

use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;

use super::run_blocking;

/// POST /messages — 404 when the user and/or category does not exist.
pub async fn create_message(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<MessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let done = run_blocking(move || state.messages.create(&req)).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::from(done))))
}

/// GET /messages/{id}
pub async fn get_message(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<Json<Message>, ApiError> {
    let message = run_blocking(move || state.messages.get(id)).await?;
    Ok(Json(message))
}

/// GET /messages
pub async fn list_messages(State(state): State<AppState>) -> Result<Response, ApiError> {
    let listing = run_blocking(move || state.messages.list()).await?;
    Ok(listing.into_response())
}

/// DELETE /messages/{id}
pub async fn delete_message(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let done = run_blocking(move || state.messages.delete(id)).await?;
    Ok(Json(done.into()))
}
