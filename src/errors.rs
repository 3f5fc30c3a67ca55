//! Unified application error type.
//! All modules (store, core, cli, import, export) return AppError to keep
//! the error handling consistent and easy to manage.

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
    // Store-related
    // ---------------------------
    #[error("Data file error: {0}")]
    Store(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid amount (must be a non-negative number): {0}")]
    InvalidAmount(String),

    #[error("Invalid pattern in import rules: {0}")]
    InvalidPattern(String),

    // ---------------------------
    // Ledger errors
    // ---------------------------
    #[error("No worker found with id {0}")]
    WorkerNotFound(String),

    #[error("No log entry found with id {0}")]
    LogNotFound(String),

    #[error("A worker with id {0} already exists")]
    DuplicateWorker(String),

    // ---------------------------
    // Import errors
    // ---------------------------
    #[error("No valid rows in import source: {0}")]
    NoValidRows(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Extraction returned no rows: the image could not be read")]
    ExtractionEmpty,

    // ---------------------------
    // Backup errors
    // ---------------------------
    #[error("Invalid backup file: {0}")]
    InvalidBackup(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
