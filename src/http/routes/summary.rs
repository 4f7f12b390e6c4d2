use axum::extract::Extension;
use axum::response::IntoResponse;
use axum::Json;

use crate::core::summary;
use crate::db::pool::SharedDb;
use crate::errors::AppResult;
use crate::http::routes::sessions::poisoned;

pub async fn get_summary(Extension(db): Extension<SharedDb>) -> AppResult<impl IntoResponse> {
    let pool = db.lock().map_err(poisoned)?;
    let summary = summary::compute(&pool.conn)?;
    Ok(Json(summary))
}
