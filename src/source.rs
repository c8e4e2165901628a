//! Loading duty log entries from JSON or CSV files.
//!
//! This is the validation boundary: status codes and timestamps are checked
//! here, so the engine only ever sees well-typed entries. Entries ending
//! before they start are let through on purpose; the engine reports them.

use crate::core::DayBoundary;
use crate::errors::{AppError, AppResult};
use crate::models::{DutyStatus, LogEntry};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Raw log line as exported by the trip log API.
#[derive(Debug, Deserialize)]
pub struct EntryRecord {
    pub status: String,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// A JSON file may hold a bare array of logs or a trip object with `logs`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonPayload {
    Entries(Vec<EntryRecord>),
    Trip { logs: Vec<EntryRecord> },
}

/// Load and validate every entry of `path` (.json or .csv).
///
/// Timestamps without an offset are read as wall-clock time of `boundary`.
pub fn load_entries(path: &Path, boundary: DayBoundary) -> AppResult<Vec<LogEntry>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let records = match ext.as_str() {
        "json" => read_json(path)?,
        "csv" => read_csv(path)?,
        _ => return Err(AppError::UnsupportedInput(path.display().to_string())),
    };

    debug!(file = %path.display(), records = records.len(), "read duty log records");

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_entry(index, boundary))
        .collect()
}

fn read_json(path: &Path) -> AppResult<Vec<EntryRecord>> {
    let content = fs::read_to_string(path)?;
    let payload: JsonPayload = serde_json::from_str(&content)?;
    Ok(match payload {
        JsonPayload::Entries(records) => records,
        JsonPayload::Trip { logs } => logs,
    })
}

fn read_csv(path: &Path) -> AppResult<Vec<EntryRecord>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut out = Vec::new();
    for record in rdr.deserialize::<EntryRecord>() {
        out.push(record?);
    }
    Ok(out)
}

impl EntryRecord {
    pub fn into_entry(self, index: usize, boundary: DayBoundary) -> AppResult<LogEntry> {
        let status = DutyStatus::from_code(&self.status).ok_or_else(|| AppError::InvalidStatus {
            index,
            code: self.status.clone(),
        })?;

        let start_time = parse_timestamp(&self.start_time, boundary).ok_or_else(|| {
            AppError::InvalidTimestamp {
                index,
                value: self.start_time.clone(),
            }
        })?;

        let end_time = match non_blank(self.end_time) {
            Some(raw) => Some(parse_timestamp(&raw, boundary).ok_or_else(|| {
                AppError::InvalidTimestamp {
                    index,
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        let location = non_blank(self.location).unwrap_or_default();
        Ok(LogEntry::new(status, start_time, end_time, location)
            .with_remarks(non_blank(self.remarks).unwrap_or_default()))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// RFC 3339 with offset, or a naive `YYYY-MM-DD[T ]HH:MM[:SS]` in `boundary`.
pub fn parse_timestamp(s: &str, boundary: DayBoundary) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    const NAIVE_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .and_then(|naive| naive.and_local_timezone(boundary.offset()).single())
        .map(|dt| dt.with_timezone(&Utc))
}
