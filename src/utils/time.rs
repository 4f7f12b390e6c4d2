//! Time utilities: epoch-millisecond clock, minute rounding, formatting.

use chrono::{Local, TimeZone, Utc};

/// Current wall-clock time as epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Round a non-negative millisecond span to whole minutes, ties half-up.
pub fn ms_to_minutes(delta_ms: i64) -> i64 {
    (delta_ms + 30_000) / 60_000
}

/// Format minutes as "Xh Ym", dropping the zero part ("45m", "2h", "-1h 30m").
pub fn format_minutes(total_minutes: i64) -> String {
    let sign = if total_minutes < 0 { "-" } else { "" };
    let abs = total_minutes.abs();
    let h = abs / 60;
    let m = abs % 60;
    if h == 0 {
        format!("{sign}{m}m")
    } else if m == 0 {
        format!("{sign}{h}h")
    } else {
        format!("{sign}{h}h {m}m")
    }
}

/// Local calendar date of an epoch-ms timestamp, for export columns.
pub fn format_date(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => String::new(),
    }
}

/// Local time of day of an epoch-ms timestamp, for export columns.
pub fn format_time(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => String::new(),
    }
}
