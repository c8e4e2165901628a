// src/export/model.rs

use crate::core::daily_summary;
use crate::models::DailyBucket;
use serde::Serialize;

/// One row per day: the four totals in raw decimal hours.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    pub date: String,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub sleeper_berth_hours: f64,
    pub anomalies: usize,
}

/// One row per day and status: the grid as a 96-character 0/1 string.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CoverageExport {
    pub date: String,
    pub status: String,
    pub slots: String,
    pub hours: f64,
}

impl From<&DailyBucket> for SummaryExport {
    fn from(bucket: &DailyBucket) -> Self {
        let summary = daily_summary(bucket);
        Self {
            date: summary.date.format("%Y-%m-%d").to_string(),
            driving_hours: summary.driving_hours,
            on_duty_hours: summary.on_duty_hours,
            off_duty_hours: summary.off_duty_hours,
            sleeper_berth_hours: summary.sleeper_berth_hours,
            anomalies: bucket.anomalies.len(),
        }
    }
}

pub(crate) fn coverage_rows(bucket: &DailyBucket) -> Vec<CoverageExport> {
    let date = bucket.date.format("%Y-%m-%d").to_string();
    bucket
        .slot_coverage
        .iter()
        .map(|(status, row)| CoverageExport {
            date: date.clone(),
            status: status.code().to_string(),
            slots: row.to_bits(),
            hours: bucket.hours(*status),
        })
        .collect()
}
