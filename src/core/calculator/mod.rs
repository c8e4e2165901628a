pub mod anomalies;
pub mod boundary;
pub mod slots;
pub mod totals;
