use super::log_entry::LogEntry;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnomalyKind {
    /// `end_time` precedes `start_time`
    EndBeforeStart,
}

impl AnomalyKind {
    pub fn describe(&self) -> &'static str {
        match self {
            AnomalyKind::EndBeforeStart => "end time precedes start time",
        }
    }
}

/// An entry left out of coverage and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Anomaly {
    pub entry: LogEntry,
    pub kind: AnomalyKind,
}
