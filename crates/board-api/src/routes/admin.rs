use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::warn;

use board_types::api::NoticeResponse;

use crate::error::ApiError;
use crate::service::ServiceError;
use crate::state::AppState;

use super::run_blocking;

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /db/reset-db — drops and recreates every table.
pub async fn reset_db(State(state): State<AppState>) -> Result<Json<NoticeResponse>, ApiError> {
    warn!("Database reset requested");
    run_blocking(move || state.db.reset().map_err(ServiceError::from)).await?;
    Ok(Json(NoticeResponse {
        message: "Database reset successful".into(),
    }))
}
