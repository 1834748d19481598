use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use board_types::api::{CategoryRequest, SuccessResponse};
use board_types::models::Category;

use crate::error::ApiError;
use crate::extract::{IdPath, JsonBody};
use crate::state::AppState;

use super::run_blocking;

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CategoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let done = run_blocking(move || state.categories.create(&req)).await?;
    Ok((StatusCode::CREATED, Json(SuccessResponse::from(done))))
}

/// GET /categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<Json<Category>, ApiError> {
    let category = run_blocking(move || state.categories.get(id)).await?;
    Ok(Json(category))
}

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> Result<Response, ApiError> {
    let listing = run_blocking(move || state.categories.list()).await?;
    Ok(listing.into_response())
}

/// PATCH /categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
    JsonBody(req): JsonBody<CategoryRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let done = run_blocking(move || state.categories.update(id, &req)).await?;
    Ok(Json(done.into()))
}

/// DELETE /categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    IdPath(id): IdPath<i64>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let done = run_blocking(move || state.categories.delete(id)).await?;
    Ok(Json(done.into()))
}
