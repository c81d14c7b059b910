//! Unified application error type.
//! All modules (db, core, import, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    #[error("Invalid menu entry: {0}")]
    InvalidEntry(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Class not found: {0}")]
    ClassNotFound(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    // ---------------------------
    // Auth errors
    // ---------------------------
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Spreadsheet error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported import file: {0}")]
    InvalidImportFile(String),

    #[error("Export error: {0}")]
    Export(String),

    /// An action that reported `{"success":false}`; the text is the
    /// user-facing failure message.
    #[error("{0}")]
    ActionFailed(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
