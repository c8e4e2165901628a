//! Unified application error type.
//! Everything outside the aggregation engine (source loading, config, cli,
//! export) returns AppError. The engine itself never fails: odd input is
//! reported as anomalies, not errors.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid timestamp in record {index}: {value}")]
    InvalidTimestamp { index: usize, value: String },

    #[error("Invalid duty status in record {index}: {code}")]
    InvalidStatus { index: usize, code: String },

    #[error("Invalid timezone: {0} (expected UTC or an offset like +02:00)")]
    InvalidTimezone(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Unsupported input file: {0} (expected .json or .csv)")]
    UnsupportedInput(String),

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
