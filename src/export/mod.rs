// src/export/mod.rs

mod csv;
mod model;
mod xlsx;

pub use model::{SessionExport, WithdrawalExport};

use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    /// Anything other than an explicit `csv` falls back to xlsx.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("csv") => ExportFormat::Csv,
            _ => ExportFormat::Xlsx,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// A rendered export, ready to be served as an attachment.
pub struct ExportFile {
    pub filename: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Render both ledgers in the requested format.
/// CSV carries the sessions sheet only; XLSX carries both sheets.
pub fn render(conn: &Connection, format: ExportFormat) -> AppResult<ExportFile> {
    let sessions: Vec<SessionExport> = queries::list_completed_sessions(conn, None, None)?
        .iter()
        .map(SessionExport::from_session)
        .collect();

    match format {
        ExportFormat::Csv => Ok(ExportFile {
            filename: "overtime-sessions.csv",
            content_type: "text/csv",
            bytes: csv::write_sessions_csv(&sessions)?,
        }),
        ExportFormat::Xlsx => {
            let withdrawals: Vec<WithdrawalExport> = queries::list_withdrawals(conn)?
                .iter()
                .map(WithdrawalExport::from_withdrawal)
                .collect();

            Ok(ExportFile {
                filename: "overtime-tracker.xlsx",
                content_type:
                    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                bytes: xlsx::write_workbook(&sessions, &withdrawals)?,
            })
        }
    }
}
