//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so that error
//! handling stays consistent from the store up to `main`.

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

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid event kind: {0}")]
    InvalidEventKind(String),

    #[error("Invalid GPS status: {0}")]
    InvalidGpsStatus(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    // ---------------------------
    // Identity errors
    // ---------------------------
    #[error("Unknown employee: {0}")]
    UnknownEmployee(String),

    #[error("Employee '{0}' is inactive")]
    InactiveEmployee(String),

    #[error("Employee '{0}' already exists")]
    DuplicateEmployee(String),

    #[error("Invalid PIN for employee '{0}'")]
    InvalidPin(String),

    #[error("PIN must be 4 to 12 digits")]
    MalformedPin,

    #[error("PIN hashing error: {0}")]
    PinHash(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
