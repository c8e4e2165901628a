use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::core::find_anomalies;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Report entries the aggregation leaves out. Never fails on anomalies.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Check { input } = cmd {
        let entries = ctx.load_entries(input)?;
        let anomalies = find_anomalies(&entries);

        if anomalies.is_empty() {
            success(format!("{} entries checked, none excluded.", entries.len()));
            return Ok(());
        }

        for a in &anomalies {
            let end = a
                .entry
                .end_time
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".to_string());
            warning(format!(
                "{} {} → {}: {}",
                a.entry.status.code(),
                a.entry.start_time.to_rfc3339(),
                end,
                a.kind.describe()
            ));
        }

        warning(format!(
            "{} of {} entries excluded from grid and totals.",
            anomalies.len(),
            entries.len()
        ));
    }
    Ok(())
}
