use csv::Writer;

use crate::errors::{AppError, AppResult};
use crate::export::model::{session_headers, session_to_row, SessionExport};

/// Render the sessions sheet as CSV into an in-memory buffer.
pub(crate) fn write_sessions_csv(sessions: &[SessionExport]) -> AppResult<Vec<u8>> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(session_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for session in sessions {
        wtr.write_record(session_to_row(session))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.into_inner().map_err(|e| AppError::Export(e.to_string()))
}
