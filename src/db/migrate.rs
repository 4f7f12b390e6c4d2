//! Schema migrations. Everything here is idempotent; `run_pending_migrations`
//! is called on every startup.

use rusqlite::{Connection, Result};

/// Create the `work_sessions` table with its indexes.
///
/// The partial unique index on `ifnull(ended_at, 0)` covers only rows where
/// `ended_at IS NULL`, so the database itself rejects a second running
/// session even if two starts race past the application-level check.
fn ensure_work_sessions_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS work_sessions (
            id          TEXT PRIMARY KEY,
            started_at  INTEGER NOT NULL,
            ended_at    INTEGER,
            note        TEXT,
            created_at  INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_work_sessions_started_at
            ON work_sessions(started_at);

        CREATE UNIQUE INDEX IF NOT EXISTS uq_work_sessions_running
            ON work_sessions(ifnull(ended_at, 0))
            WHERE ended_at IS NULL;
        "#,
    )?;
    Ok(())
}

/// Create the `withdrawals` table.
fn ensure_withdrawals_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS withdrawals (
            id            TEXT PRIMARY KEY,
            minutes       INTEGER NOT NULL,
            reason        TEXT,
            withdrawn_at  INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_withdrawals_withdrawn_at
            ON withdrawals(withdrawn_at);
        "#,
    )?;
    Ok(())
}

/// Run all pending migrations against the given connection.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_work_sessions_table(conn)?;
    ensure_withdrawals_table(conn)?;
    Ok(())
}
