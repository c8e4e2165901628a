pub mod calculator;
pub mod logic;

pub use calculator::anomalies::find_anomalies;
pub use calculator::boundary::{CANONICAL_DAY_BOUNDARY, DayBoundary};
pub use calculator::slots::{compute_slot_coverage, compute_slot_coverage_in};
pub use calculator::totals::{compute_total_hours, entry_hours};
pub use logic::{HosEngine, OpenEntryPolicy, bucket_by_day, daily_summary};
