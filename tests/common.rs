#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, Utc};
use hosgrid::models::{DutyStatus, LogEntry};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn hos() -> Command {
    cargo_bin_cmd!("hosgrid")
}

/// `hos()` pointed at a config path that does not exist, so defaults apply
/// and the user's own configuration is never read.
pub fn hos_isolated(name: &str) -> Command {
    let mut cmd = hos();
    cmd.args(["--config", &missing_config(name)]);
    cmd
}

pub fn missing_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hosgrid.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh file inside the temp dir and return its path
pub fn write_fixture(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hosgrid_in.{}", name, ext));
    fs::write(&path, content).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hosgrid_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn at(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339")
        .with_timezone(&Utc)
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn entry(status: DutyStatus, start: &str, end: Option<&str>) -> LogEntry {
    LogEntry::new(status, at(start), end.map(at), "I-35, TX")
}

/// One day with two driving blocks, a short on-duty stop and an ongoing off-duty span.
pub const DAY_LOG_JSON: &str = r#"[
  {"status": "D", "start_time": "2025-03-10T06:00:00Z", "end_time": "2025-03-10T09:30:00Z", "location": "Dallas, TX", "remarks": "Pre-trip inspection done"},
  {"status": "ON", "start_time": "2025-03-10T09:30:00Z", "end_time": "2025-03-10T10:00:00Z", "location": "Dallas, TX", "remarks": ""},
  {"status": "D", "start_time": "2025-03-10T14:00:00Z", "end_time": "2025-03-10T15:15:00Z", "location": "Waco, TX"},
  {"status": "OFF", "start_time": "2025-03-10T20:00:00Z", "end_time": null, "location": "Austin, TX"}
]"#;
