//! Unified application error type.
//! All modules (db, core, http, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::collections::BTreeMap;
use std::fmt;
use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::models::session::WorkSession;

/// Field-level validation detail, keyed by field name.
/// Serializes as `{"note": ["..."], "minutes": ["..."]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ok when no field failed, otherwise the full Validation error.
    pub fn into_result(self) -> AppResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for msg in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, msg)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Business-rule errors
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// State-invariant violation. For a rejected `start` the running
    /// session is attached so the caller can report it.
    #[error("{message}")]
    Conflict {
        message: String,
        session: Option<WorkSession>,
    },

    #[error("{0} not found")]
    NotFound(&'static str),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Shortcut for a single-field validation failure.
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.push(field, message);
        AppError::Validation(errors)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        AppError::Conflict {
            message: message.into(),
            session: None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
