pub mod admin;
pub mod categories;
pub mod messages;
pub mod users;

use axum::{
    Json, Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::error;

use board_types::api::{NoticeResponse, SuccessResponse};

use crate::error::ApiError;
use crate::service::{Listing, Mutation, ServiceResult};
use crate::state::AppState;

/// Builds the HTTP surface. The destructive `/db/reset-db` route is only
/// mounted when `dev_routes` is set.
pub fn router(state: AppState, dev_routes: bool) -> Router {
    let mut app = Router::new()
        .route("/health", get(admin::health))
        .route("/users", post(users::create_user).get(users::list_users))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/categories",
            post(categories::create_category).get(categories::list_categories),
        )
        .route(
            "/categories/{id}",
            get(categories::get_category)
                .patch(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/messages",
            post(messages::create_message).get(messages::list_messages),
        )
        .route(
            "/messages/{id}",
            get(messages::get_message).delete(messages::delete_message),
        );

    if dev_routes {
        app = app.route("/db/reset-db", post(admin::reset_db));
    }

    app.with_state(state)
}

/// Runs a blocking service call off the async runtime.
pub(crate) async fn run_blocking<F, T>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
        .map_err(ApiError::from)
}

impl From<Mutation> for SuccessResponse {
    fn from(done: Mutation) -> Self {
        Self {
            message: format!("{} successfully", done.action),
            data: done.data,
        }
    }
}

impl<T: Serialize> IntoResponse for Listing<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Rows(rows) => Json(rows).into_response(),
            Self::Empty { resource } => Json(NoticeResponse {
                message: format!("No {resource} found"),
            })
            .into_response(),
        }
    }
}
