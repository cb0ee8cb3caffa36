//! Unified application error type.
//! Store, core, export and cli all return AppError so the shell can tell
//! a validation problem from a missing record or a storage failure.

use rusqlite::ErrorCode;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Database error: {0}")]
    Db(rusqlite::Error),

    // ---------------------------
    // Input / records
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Record #{0} not found")]
    NotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Nothing to export: the selected view contains no records")]
    EmptyExport,

    #[error("Output file already exists: {0} (use --force to overwrite)")]
    FileExists(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}

/// SQLite failures that mean "the database file cannot be used right now"
/// become `StorageUnavailable`; everything else stays a plain `Db` error.
/// An `AppError` raised inside a row mapper comes back out unchanged.
impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        let e = match e {
            rusqlite::Error::FromSqlConversionFailure(col, ty, inner) => {
                match inner.downcast::<AppError>() {
                    Ok(app) => return *app,
                    Err(inner) => rusqlite::Error::FromSqlConversionFailure(col, ty, inner),
                }
            }
            other => other,
        };

        match e.sqlite_error_code() {
            Some(
                ErrorCode::CannotOpen
                | ErrorCode::ReadOnly
                | ErrorCode::DiskFull
                | ErrorCode::PermissionDenied
                | ErrorCode::SystemIoFailure
                | ErrorCode::DatabaseBusy
                | ErrorCode::DatabaseLocked
                | ErrorCode::NotADatabase,
            ) => AppError::StorageUnavailable(e.to_string()),
            _ => AppError::Db(e),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
