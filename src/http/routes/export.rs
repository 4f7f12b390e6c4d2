use axum::extract::{Extension, Query};
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::db::pool::SharedDb;
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use crate::http::routes::sessions::poisoned;

#[derive(Debug, Default, Deserialize)]
pub struct ExportQuery {
    pub format: Option<String>,
}

pub async fn export_ledgers(
    Extension(db): Extension<SharedDb>,
    Query(query): Query<ExportQuery>,
) -> AppResult<impl IntoResponse> {
    let format = ExportFormat::from_query(query.format.as_deref());

    let pool = db.lock().map_err(poisoned)?;
    let file = export::render(&pool.conn, format)?;
    drop(pool);

    tracing::info!(format = format.as_str(), bytes = file.bytes.len(), "ledger exported");

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.bytes,
    ))
}
