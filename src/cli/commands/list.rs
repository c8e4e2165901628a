use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::core::entry_hours;
use crate::errors::AppResult;
use crate::models::DailyBucket;
use crate::ui::messages::{header, warning};
use crate::utils::colors::paint_status;
use crate::utils::formatting::format_hours;
use crate::utils::table::{Column, Table};
use crate::utils::time::wall_clock;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { input, range } = cmd {
        let buckets = ctx.load_buckets(input, range)?;

        if buckets.is_empty() {
            warning("No duty log days found.");
            return Ok(());
        }

        for bucket in &buckets {
            header(format!(
                "Log History - {}",
                bucket.date.format("%A, %B %-d, %Y")
            ));
            print!("{}", render_history(bucket, ctx));
        }
    }
    Ok(())
}

fn render_history(bucket: &DailyBucket, ctx: &AppContext) -> String {
    let boundary = ctx.engine.boundary;
    let mut table = Table::new(vec![
        Column::new("Status", 21),
        Column::new("Location", 18),
        Column::new("Start", 5),
        Column::new("End", 7),
        Column::new("Duration", 12),
        Column::wrapped("Remarks", 30),
    ]);

    for entry in &bucket.entries {
        let end = entry
            .end_time
            .map(|t| wall_clock(t, boundary))
            .unwrap_or_else(|| "Ongoing".to_string());

        // ongoing entries have no fixed duration yet
        let duration = match entry.end_time {
            Some(_) => format_hours(entry_hours(entry, ctx.engine.reference_now(bucket.date))),
            None => "-".to_string(),
        };

        table.add_row(vec![
            paint_status(entry.status.label(), entry.status, ctx.color),
            entry.location.clone(),
            wall_clock(entry.start_time, boundary),
            end,
            duration,
            if entry.remarks.is_empty() {
                "-".to_string()
            } else {
                entry.remarks.clone()
            },
        ]);
    }

    table.render()
}
