//! Balance calculator: a pure reduce over both ledgers, recomputed on
//! every request. Data volume is small enough that caching would only
//! add invalidation bugs.

use rusqlite::Connection;

use crate::db::queries;
use crate::errors::AppResult;
use crate::models::summary::Summary;

pub fn compute(conn: &Connection) -> AppResult<Summary> {
    let total_minutes: i64 = queries::list_completed_sessions(conn, None, None)?
        .iter()
        .map(|s| s.duration_minutes())
        .sum();

    let withdrawn_minutes: i64 = queries::list_withdrawals(conn)?
        .iter()
        .map(|w| w.minutes)
        .sum();

    Ok(Summary {
        total_minutes,
        withdrawn_minutes,
        balance_minutes: total_minutes - withdrawn_minutes,
    })
}
