use crate::models::{Anomaly, AnomalyKind, LogEntry};
use tracing::warn;

/// Entries the grid and the totals leave out, in input order.
pub fn find_anomalies(entries: &[LogEntry]) -> Vec<Anomaly> {
    entries
        .iter()
        .filter(|e| !e.is_well_ordered())
        .map(|e| {
            let kind = AnomalyKind::EndBeforeStart;
            warn!(
                status = %e.status,
                start = %e.start_time,
                end = ?e.end_time,
                "{}; entry excluded",
                kind.describe()
            );
            Anomaly {
                entry: e.clone(),
                kind,
            }
        })
        .collect()
}
