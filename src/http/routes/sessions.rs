use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Extension, Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::core::sessions;
use crate::db::pool::SharedDb;
use crate::errors::{AppError, AppResult};
use crate::http::routes::{json_or_default, query_params};

#[derive(Debug, Default, Deserialize)]
pub struct NoteBody {
    pub note: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ManualSessionBody {
    pub started_at: Option<i64>,
    pub ended_at: Option<i64>,
    pub note: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub from: Option<i64>,
    pub to: Option<i64>,
}

pub async fn list_sessions(
    Extension(db): Extension<SharedDb>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let query = query_params(query)?;
    let pool = db.lock().map_err(poisoned)?;
    let sessions = sessions::list(&pool.conn, query.from, query.to)?;
    Ok(Json(sessions))
}

pub async fn active_session(
    Extension(db): Extension<SharedDb>,
) -> AppResult<impl IntoResponse> {
    let pool = db.lock().map_err(poisoned)?;
    let session = sessions::active(&pool.conn)?;
    // Serializes as the session object or JSON null.
    Ok(Json(session))
}

pub async fn start_session(
    Extension(db): Extension<SharedDb>,
    body: Result<Json<NoteBody>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = json_or_default(body)?;
    let pool = db.lock().map_err(poisoned)?;
    let session = sessions::start(&pool.conn, body.note)?;
    tracing::info!(id = %session.id, "session started");
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn manual_session(
    Extension(db): Extension<SharedDb>,
    body: Result<Json<ManualSessionBody>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = json_or_default(body)?;
    let pool = db.lock().map_err(poisoned)?;
    let session = sessions::manual(&pool.conn, body.started_at, body.ended_at, body.note)?;
    tracing::info!(id = %session.id, "manual session recorded");
    Ok((StatusCode::CREATED, Json(session)))
}

pub async fn stop_session(
    Extension(db): Extension<SharedDb>,
    Path(id): Path<String>,
    body: Result<Json<NoteBody>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = json_or_default(body)?;
    let pool = db.lock().map_err(poisoned)?;
    let session = sessions::stop(&pool.conn, &id, body.note)?;
    tracing::info!(id = %session.id, "session stopped");
    Ok(Json(session))
}

pub async fn delete_session(
    Extension(db): Extension<SharedDb>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let pool = db.lock().map_err(poisoned)?;
    sessions::remove(&pool.conn, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// A poisoned mutex means another handler panicked mid-write.
pub(crate) fn poisoned<T>(_: std::sync::PoisonError<T>) -> AppError {
    AppError::Internal("database handle poisoned".to_string())
}
