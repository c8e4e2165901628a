use super::{
    anomaly::Anomaly, duty_status::DutyStatus, log_entry::LogEntry, slot_grid::SlotCoverage,
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything derived for one calendar day of the boundary zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub entries: Vec<LogEntry>,
    pub slot_coverage: SlotCoverage,
    pub total_hours_by_status: BTreeMap<DutyStatus, f64>,
    pub anomalies: Vec<Anomaly>,
}

impl DailyBucket {
    pub fn hours(&self, status: DutyStatus) -> f64 {
        self.total_hours_by_status
            .get(&status)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }
}
