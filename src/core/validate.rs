//! Field-level input checks. Each helper appends to a `FieldErrors` so a
//! request reports every bad field at once, and nothing is written to the
//! database until the whole set passes.

use crate::errors::FieldErrors;

/// Notes and withdrawal reasons share the same cap.
pub const MAX_NOTE_LEN: usize = 500;

/// Optional free text, at most `MAX_NOTE_LEN` characters.
/// The cap counts Unicode scalar values, not bytes or UTF-16 code units,
/// so a 500-emoji note is exactly at the limit.
pub fn note_length(errors: &mut FieldErrors, field: &str, value: Option<&str>) {
    if let Some(text) = value {
        if text.chars().count() > MAX_NOTE_LEN {
            errors.push(
                field,
                format!("must be at most {MAX_NOTE_LEN} characters"),
            );
        }
    }
}

/// Required positive epoch-millisecond timestamp.
pub fn timestamp(errors: &mut FieldErrors, field: &str, value: Option<i64>) {
    match value {
        None => errors.push(field, "is required"),
        Some(ms) if ms <= 0 => errors.push(field, "must be a positive integer"),
        Some(_) => {}
    }
}

/// `ended_at` must be strictly after `started_at`; zero or negative
/// durations are rejected. Only checked once both timestamps are present.
pub fn time_range(errors: &mut FieldErrors, started_at: Option<i64>, ended_at: Option<i64>) {
    if let (Some(start), Some(end)) = (started_at, ended_at) {
        if start > 0 && end > 0 && end <= start {
            errors.push("ended_at", "must be after started_at");
        }
    }
}

/// Required positive integer minute count.
pub fn positive_minutes(errors: &mut FieldErrors, field: &str, value: Option<i64>) {
    match value {
        None => errors.push(field, "is required"),
        Some(m) if m <= 0 => errors.push(field, "must be a positive integer"),
        Some(_) => {}
    }
}
