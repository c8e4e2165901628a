//! Discretisation of duty spans into the 96-slot daily grid.

use crate::core::calculator::boundary::{CANONICAL_DAY_BOUNDARY, DayBoundary};
use crate::models::{LAST_SLOT, LogEntry, SlotCoverage};
use chrono::NaiveDate;
use tracing::debug;

/// Coverage of `day` under the canonical (UTC) boundary.
pub fn compute_slot_coverage(day_entries: &[LogEntry], day: NaiveDate) -> SlotCoverage {
    compute_slot_coverage_in(day_entries, day, CANONICAL_DAY_BOUNDARY)
}

/// Mark, per status, every slot of `day` touched by an entry starting on `day`.
///
/// Statuses are independent rows: overlapping entries of different statuses
/// are both marked. Entries ending before they start are skipped.
pub fn compute_slot_coverage_in(
    day_entries: &[LogEntry],
    day: NaiveDate,
    boundary: DayBoundary,
) -> SlotCoverage {
    let mut coverage = SlotCoverage::new();

    for entry in day_entries {
        if !entry.is_well_ordered() {
            debug!(
                status = %entry.status,
                start = %entry.start_time,
                "skipping entry ending before its start"
            );
            continue;
        }

        if boundary.date_of(entry.start_time) != day {
            debug!(
                status = %entry.status,
                start = %entry.start_time,
                %day,
                "entry starts on another day"
            );
            continue;
        }

        let (start, end) = slot_span(entry, day, boundary);
        coverage.row_mut(entry.status).mark(start, end);
    }

    coverage
}

/// Inclusive `(start_slot, end_slot)` of a well-ordered entry starting on `day`.
///
/// - ends on `day` → slot of its last covered instant (never below start)
/// - ends on a later day, or still ongoing → `LAST_SLOT`
pub fn slot_span(entry: &LogEntry, day: NaiveDate, boundary: DayBoundary) -> (usize, usize) {
    let start = boundary.slot_of(entry.start_time);

    let end = match entry.end_time {
        Some(end) if boundary.date_of(end) == day => boundary.slot_before(end).max(start),
        _ => LAST_SLOT,
    };

    (start, end)
}
