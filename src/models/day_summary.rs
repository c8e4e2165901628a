use super::duty_status::DutyStatus;
use chrono::NaiveDate;
use serde::Serialize;

/// Per-day totals in raw decimal hours. Rounding is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub sleeper_berth_hours: f64,
}

impl DailySummary {
    pub fn hours(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty_hours,
            DutyStatus::SleeperBerth => self.sleeper_berth_hours,
            DutyStatus::Driving => self.driving_hours,
            DutyStatus::OnDutyNotDriving => self.on_duty_hours,
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.driving_hours + self.on_duty_hours + self.off_duty_hours + self.sleeper_berth_hours
    }
}
