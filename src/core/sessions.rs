//! Session ledger: owns the single-running-session invariant and the
//! session lifecycle (start, stop, manual entry, list, delete).

use rusqlite::Connection;
use uuid::Uuid;

use crate::core::validate;
use crate::db::queries;
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::models::session::WorkSession;
use crate::utils::time::now_ms;

const ALREADY_RUNNING: &str = "A session is already running";

/// Start a new running session.
///
/// The friendly path is the read-before-write check, which lets us attach
/// the running session to the Conflict error. If two starts race past it,
/// the partial unique index rejects the second insert and we map the
/// constraint failure to the same Conflict.
pub fn start(conn: &Connection, note: Option<String>) -> AppResult<WorkSession> {
    let mut errors = FieldErrors::new();
    validate::note_length(&mut errors, "note", note.as_deref());
    errors.into_result()?;

    if let Some(running) = queries::find_running_session(conn)? {
        return Err(AppError::Conflict {
            message: ALREADY_RUNNING.to_string(),
            session: Some(running),
        });
    }

    let now = now_ms();
    let session = WorkSession {
        id: Uuid::new_v4().to_string(),
        started_at: now,
        ended_at: None,
        note,
        created_at: now,
    };

    match queries::insert_session(conn, &session) {
        Ok(()) => Ok(session),
        Err(e) if is_unique_violation(&e) => Err(AppError::Conflict {
            message: ALREADY_RUNNING.to_string(),
            session: queries::find_running_session(conn)?,
        }),
        Err(e) => Err(e.into()),
    }
}

/// Stop a running session, setting `ended_at` to now.
/// Stopping an already-stopped session is rejected, not a no-op.
pub fn stop(conn: &Connection, id: &str, note: Option<String>) -> AppResult<WorkSession> {
    let mut errors = FieldErrors::new();
    validate::note_length(&mut errors, "note", note.as_deref());
    errors.into_result()?;

    let session = queries::find_session(conn, id)?.ok_or(AppError::NotFound("Session"))?;

    if !session.is_running() {
        return Err(AppError::conflict("Session already stopped"));
    }

    let ended_at = now_ms();
    queries::finish_session(conn, id, ended_at, note.as_deref())?;

    Ok(WorkSession {
        ended_at: Some(ended_at),
        note: note.or(session.note),
        ..session
    })
}

/// Record a completed session with explicit timestamps.
pub fn manual(
    conn: &Connection,
    started_at: Option<i64>,
    ended_at: Option<i64>,
    note: Option<String>,
) -> AppResult<WorkSession> {
    let mut errors = FieldErrors::new();
    validate::timestamp(&mut errors, "started_at", started_at);
    validate::timestamp(&mut errors, "ended_at", ended_at);
    validate::time_range(&mut errors, started_at, ended_at);
    validate::note_length(&mut errors, "note", note.as_deref());
    errors.into_result()?;

    // into_result() guarantees both timestamps are present here.
    let session = WorkSession {
        id: Uuid::new_v4().to_string(),
        started_at: started_at.ok_or_else(|| AppError::invalid_field("started_at", "is required"))?,
        ended_at: Some(ended_at.ok_or_else(|| AppError::invalid_field("ended_at", "is required"))?),
        note,
        created_at: now_ms(),
    };

    queries::insert_session(conn, &session)?;
    Ok(session)
}

/// Completed sessions, newest first, optionally bounded by `started_at`.
pub fn list(conn: &Connection, from: Option<i64>, to: Option<i64>) -> AppResult<Vec<WorkSession>> {
    queries::list_completed_sessions(conn, from, to)
}

/// The currently running session, if any.
pub fn active(conn: &Connection) -> AppResult<Option<WorkSession>> {
    queries::find_running_session(conn)
}

/// Delete a session. Running sessions may be deleted too.
pub fn remove(conn: &Connection, id: &str) -> AppResult<()> {
    if queries::delete_session(conn, id)? == 0 {
        return Err(AppError::NotFound("Session"));
    }
    Ok(())
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
