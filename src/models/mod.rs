pub mod anomaly;
pub mod daily_bucket;
pub mod day_summary;
pub mod duty_status;
pub mod log_entry;
pub mod slot_grid;

pub use anomaly::{Anomaly, AnomalyKind};
pub use daily_bucket::DailyBucket;
pub use day_summary::DailySummary;
pub use duty_status::DutyStatus;
pub use log_entry::LogEntry;
pub use slot_grid::{LAST_SLOT, SLOT_MINUTES, SLOTS_PER_DAY, SlotCoverage, SlotRow};
