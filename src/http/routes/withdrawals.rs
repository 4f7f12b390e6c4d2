use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::core::withdrawals;
use crate::db::pool::SharedDb;
use crate::errors::AppResult;
use crate::http::routes::json_or_default;
use crate::http::routes::sessions::poisoned;

#[derive(Debug, Default, Deserialize)]
pub struct CreateWithdrawalBody {
    pub minutes: Option<i64>,
    pub reason: Option<String>,
}

pub async fn list_withdrawals(
    Extension(db): Extension<SharedDb>,
) -> AppResult<impl IntoResponse> {
    let pool = db.lock().map_err(poisoned)?;
    let withdrawals = withdrawals::list(&pool.conn)?;
    Ok(Json(withdrawals))
}

pub async fn create_withdrawal(
    Extension(db): Extension<SharedDb>,
    body: Result<Json<CreateWithdrawalBody>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = json_or_default(body)?;
    let pool = db.lock().map_err(poisoned)?;
    let withdrawal = withdrawals::create(&pool.conn, body.minutes, body.reason)?;
    tracing::info!(id = %withdrawal.id, minutes = withdrawal.minutes, "withdrawal recorded");
    Ok((StatusCode::CREATED, Json(withdrawal)))
}

pub async fn delete_withdrawal(
    Extension(db): Extension<SharedDb>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let pool = db.lock().map_err(poisoned)?;
    withdrawals::remove(&pool.conn, &id)?;
    Ok(StatusCode::NO_CONTENT)
}
