use crate::models::{DutyStatus, LogEntry};
use chrono::{DateTime, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Hours spanned by one entry. Ongoing entries run until `reference_now`.
///
/// Entries ending before their start, and ongoing entries whose
/// `reference_now` lies before their start, count as zero.
pub fn entry_hours(entry: &LogEntry, reference_now: DateTime<Utc>) -> f64 {
    if !entry.is_well_ordered() {
        return 0.0;
    }

    let end = entry.end_time.unwrap_or(reference_now);
    if end <= entry.start_time {
        return 0.0;
    }

    (end - entry.start_time).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Sum of `entry_hours` over the entries with `status`. Unrounded.
pub fn compute_total_hours(
    day_entries: &[LogEntry],
    status: DutyStatus,
    reference_now: DateTime<Utc>,
) -> f64 {
    day_entries
        .iter()
        .filter(|e| e.status == status)
        .map(|e| entry_hours(e, reference_now))
        .sum()
}
