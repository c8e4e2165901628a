//! Time utilities: parsing `--now`, formatting hours and wall-clock times.

use crate::core::DayBoundary;
use crate::errors::{AppError, AppResult};
use crate::source::parse_timestamp;
use chrono::{DateTime, Utc};

pub fn parse_optional_now(
    input: Option<&String>,
    boundary: DayBoundary,
) -> AppResult<Option<DateTime<Utc>>> {
    if let Some(s) = input {
        let t = parse_timestamp(s, boundary).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// `HH:MM` of `instant` in the boundary zone.
pub fn wall_clock(instant: DateTime<Utc>, boundary: DayBoundary) -> String {
    boundary.local(instant).format("%H:%M").to_string()
}

/// Decimal hours rounded for display, e.g. `4.75` with 1 decimal → "4.8".
pub fn format_decimal_hours(hours: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, hours)
}
