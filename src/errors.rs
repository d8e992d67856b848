//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use rusqlite::ffi;
use std::fmt;
use std::io;
use thiserror::Error;

/// Which store constraint rejected a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Primary key / unique index (e.g. a date already recorded).
    Duplicate,
    /// A referenced Week or Location row does not exist.
    ForeignKey,
    Other,
}

impl Constraint {
    /// Classify a rusqlite error. Returns `None` when it is not a constraint failure.
    pub fn classify(err: &rusqlite::Error) -> Option<Self> {
        match err {
            rusqlite::Error::SqliteFailure(e, _) if e.code == ffi::ErrorCode::ConstraintViolation => {
                Some(match e.extended_code {
                    ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                        Constraint::Duplicate
                    }
                    ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Constraint::ForeignKey,
                    _ => Constraint::Other,
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Constraint::Duplicate => "duplicate key",
            Constraint::ForeignKey => "foreign key",
            Constraint::Other => "constraint",
        };
        f.write_str(s)
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

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Integrity violation in {operation} [{key}] ({constraint}): {message}")]
    IntegrityViolation {
        operation: &'static str,
        key: String,
        constraint: Constraint,
        message: String,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid week id: {0}")]
    InvalidWeekId(String),

    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    // ---------------------------
    // Import / config / export
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Wrap a rusqlite error raised by a mutation.
    /// Constraint failures become `IntegrityViolation`, anything else stays `Db`.
    pub fn from_mutation(operation: &'static str, key: String, err: rusqlite::Error) -> Self {
        match Constraint::classify(&err) {
            Some(constraint) => AppError::IntegrityViolation {
                operation,
                key,
                constraint,
                message: err.to_string(),
            },
            None => AppError::Db(err),
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            AppError::IntegrityViolation {
                constraint: Constraint::Duplicate,
                ..
            }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
