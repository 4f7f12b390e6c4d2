// src/export/model.rs

use serde::Serialize;

use crate::models::session::WorkSession;
use crate::models::withdrawal::Withdrawal;
use crate::utils::time::{format_date, format_minutes, format_time};

/// Flat per-session row for export.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: i64,
    pub duration: String,
    pub note: String,
}

impl SessionExport {
    pub fn from_session(session: &WorkSession) -> Self {
        let minutes = session.duration_minutes();
        Self {
            date: format_date(session.started_at),
            start_time: format_time(session.started_at),
            end_time: session.ended_at.map(format_time).unwrap_or_default(),
            duration_minutes: minutes,
            duration: format_minutes(minutes),
            note: session.note.clone().unwrap_or_default(),
        }
    }
}

/// Flat per-withdrawal row for export.
#[derive(Serialize, Clone, Debug)]
pub struct WithdrawalExport {
    pub date: String,
    pub minutes: i64,
    pub duration: String,
    pub reason: String,
}

impl WithdrawalExport {
    pub fn from_withdrawal(withdrawal: &Withdrawal) -> Self {
        Self {
            date: format_date(withdrawal.withdrawn_at),
            minutes: withdrawal.minutes,
            duration: format_minutes(withdrawal.minutes),
            reason: withdrawal.reason.clone().unwrap_or_default(),
        }
    }
}

/// Header rows for the two sheets.
pub(crate) fn session_headers() -> Vec<&'static str> {
    vec![
        "Date",
        "Start Time",
        "End Time",
        "Duration (minutes)",
        "Duration",
        "Note",
    ]
}

pub(crate) fn withdrawal_headers() -> Vec<&'static str> {
    vec!["Date", "Minutes Withdrawn", "Duration", "Reason"]
}

pub(crate) fn session_to_row(s: &SessionExport) -> Vec<String> {
    vec![
        s.date.clone(),
        s.start_time.clone(),
        s.end_time.clone(),
        s.duration_minutes.to_string(),
        s.duration.clone(),
        s.note.clone(),
    ]
}

pub(crate) fn withdrawal_to_row(w: &WithdrawalExport) -> Vec<String> {
    vec![
        w.date.clone(),
        w.minutes.to_string(),
        w.duration.clone(),
        w.reason.clone(),
    ]
}
