//! Maps the AppError taxonomy onto HTTP responses:
//! Validation → 400, Conflict → 409, NotFound → 404, the rest → 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::errors::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "validation failed",
                    "fieldErrors": fields,
                })),
            )
                .into_response(),

            AppError::Conflict { message, session } => {
                let mut body = json!({ "error": message });
                if let Some(session) = session {
                    // Report the conflicting resource alongside the error.
                    if let Ok(value) = serde_json::to_value(session) {
                        body["session"] = value;
                    }
                }
                (StatusCode::CONFLICT, Json(body)).into_response()
            }

            AppError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{what} not found") })),
            )
                .into_response(),

            other => {
                tracing::error!(error = %other, "request failed");
                json_error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal error",
                )
            }
        }
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}
