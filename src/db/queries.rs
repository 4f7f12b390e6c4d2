//! Thin CRUD queries over `work_sessions` and `withdrawals`.
//! Business rules (single-running-session, validation) live in `core`.

use rusqlite::{params, Connection, OptionalExtension, Result, Row};

use crate::errors::AppResult;
use crate::models::session::WorkSession;
use crate::models::withdrawal::Withdrawal;

pub fn map_session_row(row: &Row) -> Result<WorkSession> {
    Ok(WorkSession {
        id: row.get("id")?,
        started_at: row.get("started_at")?,
        ended_at: row.get("ended_at")?,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_withdrawal_row(row: &Row) -> Result<Withdrawal> {
    Ok(Withdrawal {
        id: row.get("id")?,
        minutes: row.get("minutes")?,
        reason: row.get("reason")?,
        withdrawn_at: row.get("withdrawn_at")?,
    })
}

// ---------------------------
// work_sessions
// ---------------------------

pub fn insert_session(conn: &Connection, session: &WorkSession) -> Result<()> {
    conn.execute(
        "INSERT INTO work_sessions (id, started_at, ended_at, note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            session.id,
            session.started_at,
            session.ended_at,
            session.note,
            session.created_at,
        ],
    )?;
    Ok(())
}

pub fn find_session(conn: &Connection, id: &str) -> AppResult<Option<WorkSession>> {
    let mut stmt = conn.prepare("SELECT * FROM work_sessions WHERE id = ?1")?;
    let session = stmt.query_row([id], map_session_row).optional()?;
    Ok(session)
}

/// The single running session (newest `created_at`), if any.
pub fn find_running_session(conn: &Connection) -> AppResult<Option<WorkSession>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM work_sessions
         WHERE ended_at IS NULL
         ORDER BY created_at DESC
         LIMIT 1",
    )?;
    let session = stmt.query_row([], map_session_row).optional()?;
    Ok(session)
}

/// Completed sessions, newest `started_at` first, optionally bounded to
/// `started_at` within `[from, to]` inclusive.
pub fn list_completed_sessions(
    conn: &Connection,
    from: Option<i64>,
    to: Option<i64>,
) -> AppResult<Vec<WorkSession>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM work_sessions
         WHERE ended_at IS NOT NULL
           AND (?1 IS NULL OR started_at >= ?1)
           AND (?2 IS NULL OR started_at <= ?2)
         ORDER BY started_at DESC",
    )?;

    let rows = stmt.query_map(params![from, to], map_session_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Set `ended_at` on a session, overwriting the note only when one is given.
pub fn finish_session(
    conn: &Connection,
    id: &str,
    ended_at: i64,
    note: Option<&str>,
) -> Result<()> {
    match note {
        Some(note) => conn.execute(
            "UPDATE work_sessions SET ended_at = ?1, note = ?2 WHERE id = ?3",
            params![ended_at, note, id],
        )?,
        None => conn.execute(
            "UPDATE work_sessions SET ended_at = ?1 WHERE id = ?2",
            params![ended_at, id],
        )?,
    };
    Ok(())
}

/// Returns the number of deleted rows (0 when the id is unknown).
pub fn delete_session(conn: &Connection, id: &str) -> Result<usize> {
    let affected = conn.execute("DELETE FROM work_sessions WHERE id = ?1", [id])?;
    Ok(affected)
}

// ---------------------------
// withdrawals
// ---------------------------

pub fn insert_withdrawal(conn: &Connection, withdrawal: &Withdrawal) -> Result<()> {
    conn.execute(
        "INSERT INTO withdrawals (id, minutes, reason, withdrawn_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            withdrawal.id,
            withdrawal.minutes,
            withdrawal.reason,
            withdrawal.withdrawn_at,
        ],
    )?;
    Ok(())
}

/// All withdrawals, newest `withdrawn_at` first.
pub fn list_withdrawals(conn: &Connection) -> AppResult<Vec<Withdrawal>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM withdrawals ORDER BY withdrawn_at DESC",
    )?;

    let rows = stmt.query_map([], map_withdrawal_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Returns the number of deleted rows (0 when the id is unknown).
pub fn delete_withdrawal(conn: &Connection, id: &str) -> Result<usize> {
    let affected = conn.execute("DELETE FROM withdrawals WHERE id = ?1", [id])?;
    Ok(affected)
}
