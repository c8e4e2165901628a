//! Day boundary: which zone decides the calendar day and the wall-clock
//! minutes of an instant.

use crate::models::slot_grid::{SLOT_MINUTES, SLOTS_PER_DAY};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, Timelike, Utc,
};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayBoundary {
    Utc,
    Fixed(FixedOffset),
}

/// Days are cut at UTC midnight unless configured otherwise.
pub const CANONICAL_DAY_BOUNDARY: DayBoundary = DayBoundary::Utc;

impl Default for DayBoundary {
    fn default() -> Self {
        CANONICAL_DAY_BOUNDARY
    }
}

impl DayBoundary {
    /// Parse `UTC` / `Z` or an offset such as `+02:00`, `-0500`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
            return Some(DayBoundary::Utc);
        }
        s.parse::<FixedOffset>().ok().map(DayBoundary::Fixed)
    }

    pub fn offset(&self) -> FixedOffset {
        match self {
            DayBoundary::Utc => Utc.fix(),
            DayBoundary::Fixed(offset) => *offset,
        }
    }

    /// Wall-clock reading of `instant` in this zone.
    /// Falls back to the UTC reading at the edges of the representable range.
    pub fn local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        let utc = instant.naive_utc();
        utc.checked_add_offset(self.offset()).unwrap_or(utc)
    }

    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        self.local(instant).date()
    }

    pub fn minutes_since_midnight(&self, instant: DateTime<Utc>) -> u32 {
        self.local(instant).time().num_seconds_from_midnight() / 60
    }

    /// Slot holding `instant`: floor(minutes / 15).
    pub fn slot_of(&self, instant: DateTime<Utc>) -> usize {
        (self.minutes_since_midnight(instant) / SLOT_MINUTES) as usize
    }

    /// Slot holding the last instant strictly before `instant`.
    /// An end that lies exactly on a slot edge does not touch the next slot.
    pub fn slot_before(&self, instant: DateTime<Utc>) -> usize {
        let time = self.local(instant).time();
        let secs = time.num_seconds_from_midnight();
        let elapsed = match (secs, time.nanosecond()) {
            (0, 0) => return 0,
            (s, 0) => s - 1,
            (s, _) => s,
        };
        ((elapsed / (SLOT_MINUTES * 60)) as usize).min(SLOTS_PER_DAY - 1)
    }

    /// Local midnight opening `date`, as an instant.
    /// Saturates to `MIN_UTC` / `MAX_UTC` when the instant is not representable.
    pub fn day_start(&self, date: NaiveDate) -> DateTime<Utc> {
        let offset = self.offset();
        match date.and_time(NaiveTime::MIN).checked_sub_offset(offset) {
            Some(utc) => DateTime::from_naive_utc_and_offset(utc, Utc),
            None if offset.local_minus_utc() > 0 => DateTime::<Utc>::MIN_UTC,
            None => DateTime::<Utc>::MAX_UTC,
        }
    }

    /// Local midnight closing `date`, as an instant. Saturates to `MAX_UTC`.
    pub fn day_end(&self, date: NaiveDate) -> DateTime<Utc> {
        self.day_start(date)
            .checked_add_signed(TimeDelta::days(1))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

impl fmt::Display for DayBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayBoundary::Utc => f.write_str("UTC"),
            DayBoundary::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}
