//! Unified application error type.
//! All modules (sheet, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Workbook-related
    // ---------------------------
    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Unexpected month sheets (expected \"01\"..\"12\"): {0}")]
    MonthSheets(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No entries found for date {0}")]
    NoEntriesForDate(String),

    #[error("Invalid pair index: {0}")]
    InvalidPair(usize),

    #[error("End time {end} is not after start time {start}")]
    EmptyInterval { start: String, end: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

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

impl From<rust_xlsxwriter::XlsxError> for AppError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AppError::Export(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
