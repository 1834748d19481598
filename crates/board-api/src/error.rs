use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use board_types::api::ErrorResponse;
use tracing::error;

use crate::service::ServiceError;

const INTERNAL_DETAIL: &str = "Internal server error";

/// Transport-level error. Every variant renders as `{"detail": ...}` with a
/// fixed status code.
#[derive(Debug)]
pub enum ApiError {
    /// 400
    BadRequest(String),

    /// 404
    NotFound(String),

    /// 409
    Conflict(String),

    /// 500, the cause is logged and never sent to the client
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            Self::BadRequest(detail) | Self::NotFound(detail) | Self::Conflict(detail) => detail,
            Self::Internal(cause) => {
                error!("Internal error: {}", cause);
                INTERNAL_DETAIL.to_string()
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let detail = err.to_string();
        match err {
            ServiceError::BadRequest(_) => Self::BadRequest(detail),
            ServiceError::NotFound(_) => Self::NotFound(detail),
            ServiceError::AlreadyExists(_) | ServiceError::InUse(_) => Self::Conflict(detail),
            ServiceError::Internal(_) => Self::Internal(detail),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
