//! Single error type shared by every layer (db, core, auth, cli).

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // Filesystem and database
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // Input parsing
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    // Authentication and authorization
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Incorrect password")]
    IncorrectPassword,

    #[error("User is deactivated")]
    UserDeactivated,

    #[error("Not logged in: run `tallysheet login` first")]
    NotLoggedIn,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // Missing records
    #[error("No entry found with id {0}")]
    EntryNotFound(i64),

    #[error("No company found with id {0}")]
    CompanyNotFound(i64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
