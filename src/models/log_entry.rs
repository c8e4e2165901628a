use super::duty_status::DutyStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded duty-status span.
///
/// Instants are stored in UTC; the day they are filed under depends on the
/// `DayBoundary` used when aggregating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub status: DutyStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>, // None ⇔ still ongoing
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub remarks: String,
}

impl LogEntry {
    pub fn new(
        status: DutyStatus,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            status,
            start_time,
            end_time,
            location: location.into(),
            remarks: String::new(),
        }
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = remarks.into();
        self
    }

    pub fn is_ongoing(&self) -> bool {
        self.end_time.is_none()
    }

    /// false only when an end is present and precedes the start.
    pub fn is_well_ordered(&self) -> bool {
        match self.end_time {
            Some(end) => end >= self.start_time,
            None => true,
        }
    }
}
