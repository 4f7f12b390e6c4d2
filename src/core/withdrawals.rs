//! Withdrawal ledger: deductions from the banked balance, independent of
//! any session. Rows are immutable after creation except by deletion.

use rusqlite::Connection;
use uuid::Uuid;

use crate::core::validate;
use crate::db::queries;
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::models::withdrawal::Withdrawal;
use crate::utils::time::now_ms;

pub fn create(
    conn: &Connection,
    minutes: Option<i64>,
    reason: Option<String>,
) -> AppResult<Withdrawal> {
    let mut errors = FieldErrors::new();
    validate::positive_minutes(&mut errors, "minutes", minutes);
    validate::note_length(&mut errors, "reason", reason.as_deref());
    errors.into_result()?;

    let withdrawal = Withdrawal {
        id: Uuid::new_v4().to_string(),
        minutes: minutes.ok_or_else(|| AppError::invalid_field("minutes", "is required"))?,
        reason,
        withdrawn_at: now_ms(),
    };

    queries::insert_withdrawal(conn, &withdrawal)?;
    Ok(withdrawal)
}

/// All withdrawals, newest first.
pub fn list(conn: &Connection) -> AppResult<Vec<Withdrawal>> {
    queries::list_withdrawals(conn)
}

pub fn remove(conn: &Connection, id: &str) -> AppResult<()> {
    if queries::delete_withdrawal(conn, id)? == 0 {
        return Err(AppError::NotFound("Withdrawal"));
    }
    Ok(())
}
