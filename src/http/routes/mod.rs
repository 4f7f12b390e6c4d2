use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::Query;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};

pub mod export;
pub mod sessions;
pub mod summary;
pub mod system;
pub mod withdrawals;

use crate::errors::{AppError, AppResult, FieldErrors};

/// Router for the whole REST surface.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/sessions", get(sessions::list_sessions))
        .route("/sessions/active", get(sessions::active_session))
        .route("/sessions/start", post(sessions::start_session))
        .route("/sessions/manual", post(sessions::manual_session))
        .route("/sessions/:id/stop", patch(sessions::stop_session))
        .route("/sessions/:id", delete(sessions::delete_session))
        .route(
            "/withdrawals",
            get(withdrawals::list_withdrawals).post(withdrawals::create_withdrawal),
        )
        .route("/withdrawals/:id", delete(withdrawals::delete_withdrawal))
        .route("/summary", get(summary::get_summary))
        .route("/export", get(export::export_ledgers))
}

/// An absent body is treated as `{}`; malformed JSON or wrong field types
/// are a validation failure, not a transport error.
pub(crate) fn json_or_default<T: Default>(
    body: Result<Json<T>, JsonRejection>,
) -> AppResult<T> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => {
            let mut errors = FieldErrors::new();
            errors.push("body", rejection.body_text());
            Err(AppError::Validation(errors))
        }
    }
}

/// Unparseable query parameters get the same JSON validation shape as
/// malformed bodies instead of axum's plain-text rejection.
pub(crate) fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> AppResult<T> {
    match query {
        Ok(Query(value)) => Ok(value),
        Err(rejection) => {
            let mut errors = FieldErrors::new();
            errors.push("query", rejection.body_text());
            Err(AppError::Validation(errors))
        }
    }
}
