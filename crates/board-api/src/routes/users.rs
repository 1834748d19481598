use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use board_types::api::{SuccessResponse, UserRequest};
use board_types::models::User;

use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;

use super::run_blocking;

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<UserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let done = run_blocking(move || state.users.create(&req)).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::from(done))))
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<Json<User>, ApiError> {
    let user = run_blocking(move || state.users.get(id)).await?;
    Ok(Json(user))
}

/// GET /users — newest first, or a notice when there are none.
pub async fn list_users(State(state): State<AppState>) -> Result<Response, ApiError> {
    let listing = run_blocking(move || state.users.list()).await?;
    Ok(listing.into_response())
}

/// PATCH /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    JsonBody(req): JsonBody<UserRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let done = run_blocking(move || state.users.update(id, &req)).await?;
    Ok(Json(done.into()))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let done = run_blocking(move || state.users.delete(id)).await?;
    Ok(Json(done.into()))
}
