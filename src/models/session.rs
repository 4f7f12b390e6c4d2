//! A tracked span of work time: running (no end) or completed (has end).

use serde::{Deserialize, Serialize};

use crate::utils::time::ms_to_minutes;

/// One row of the `work_sessions` table. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSession {
    pub id: String,
    pub started_at: i64,
    /// None while the session is still running. Never cleared once set.
    pub ended_at: Option<i64>,
    pub note: Option<String>,
    pub created_at: i64,
}

impl WorkSession {
    pub fn is_running(&self) -> bool {
        self.ended_at.is_none()
    }

    /// Duration in whole minutes, ties rounded half-up.
    /// A running session contributes nothing to the balance.
    pub fn duration_minutes(&self) -> i64 {
        match self.ended_at {
            Some(ended_at) => ms_to_minutes(ended_at - self.started_at),
            None => 0,
        }
    }
}
