use crate::core::calculator::anomalies::find_anomalies;
use crate::core::calculator::boundary::DayBoundary;
use crate::core::calculator::slots::compute_slot_coverage_in;
use crate::core::calculator::totals::compute_total_hours;
use crate::models::{DailyBucket, DailySummary, DutyStatus, LogEntry};
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::BTreeMap;
use tracing::debug;

/// Where an ongoing entry stops counting when totals are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenEntryPolicy {
    /// Up to the midnight closing the entry's day.
    #[default]
    EndOfDay,
    /// Up to a caller-supplied instant.
    ReferenceNow(DateTime<Utc>),
}

/// Aggregation engine. Holds only policy; every call works on its input
/// alone and returns fresh values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HosEngine {
    pub boundary: DayBoundary,
    pub open_entries: OpenEntryPolicy,
}

impl HosEngine {
    pub fn new(boundary: DayBoundary, open_entries: OpenEntryPolicy) -> Self {
        Self {
            boundary,
            open_entries,
        }
    }

    /// UTC days, ongoing entries counted to end of day.
    pub fn canonical() -> Self {
        Self::default()
    }

    /// Instant handed to `compute_total_hours` for `day`.
    pub fn reference_now(&self, day: NaiveDate) -> DateTime<Utc> {
        match self.open_entries {
            OpenEntryPolicy::EndOfDay => self.boundary.day_end(day),
            OpenEntryPolicy::ReferenceNow(now) => now,
        }
    }

    /// Group entries by the calendar day of their start and derive each day.
    pub fn bucket_by_day(&self, entries: &[LogEntry]) -> BTreeMap<NaiveDate, DailyBucket> {
        let mut grouped: BTreeMap<NaiveDate, Vec<LogEntry>> = BTreeMap::new();
        for entry in entries {
            grouped
                .entry(self.boundary.date_of(entry.start_time))
                .or_default()
                .push(entry.clone());
        }

        debug!(
            entries = entries.len(),
            days = grouped.len(),
            boundary = %self.boundary,
            "bucketed duty log"
        );

        grouped
            .into_iter()
            .map(|(date, day_entries)| (date, self.build_bucket(date, day_entries)))
            .collect()
    }

    /// Derive one day from entries already known to start on it.
    pub fn build_bucket(&self, date: NaiveDate, mut entries: Vec<LogEntry>) -> DailyBucket {
        entries.sort_by_key(|e| e.start_time);

        let slot_coverage = compute_slot_coverage_in(&entries, date, self.boundary);
        // only ongoing entries read it
        let now = if entries.iter().any(LogEntry::is_ongoing) {
            self.reference_now(date)
        } else {
            DateTime::<Utc>::MAX_UTC
        };
        let total_hours_by_status = DutyStatus::ALL
            .iter()
            .map(|status| (*status, compute_total_hours(&entries, *status, now)))
            .collect();
        let anomalies = find_anomalies(&entries);

        DailyBucket {
            date,
            entries,
            slot_coverage,
            total_hours_by_status,
            anomalies,
        }
    }
}

/// `HosEngine::canonical().bucket_by_day(entries)`
pub fn bucket_by_day(entries: &[LogEntry]) -> BTreeMap<NaiveDate, DailyBucket> {
    HosEngine::canonical().bucket_by_day(entries)
}

pub fn daily_summary(bucket: &DailyBucket) -> DailySummary {
    DailySummary {
        date: bucket.date,
        driving_hours: bucket.hours(DutyStatus::Driving),
        on_duty_hours: bucket.hours(DutyStatus::OnDutyNotDriving),
        off_duty_hours: bucket.hours(DutyStatus::OffDuty),
        sleeper_berth_hours: bucket.hours(DutyStatus::SleeperBerth),
    }
}
