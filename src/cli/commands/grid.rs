use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::{DailyBucket, DutyStatus, SLOTS_PER_DAY};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{grey, paint_status};
use crate::utils::formatting::pad_right;
use crate::utils::time::format_decimal_hours;

const LABEL_WIDTH: usize = 23;
const COVERED: &str = "█";
const FREE: &str = "·";

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Grid { input, range } = cmd {
        let buckets = ctx.load_buckets(input, range)?;

        if buckets.is_empty() {
            warning("No duty log days found.");
            return Ok(());
        }

        for bucket in &buckets {
            header(format!("HOS Grid - {} ({})", bucket.date, ctx.engine.boundary));
            print!("{}", render_grid(bucket, ctx.color, ctx.cfg.hours_decimals));

            if bucket.has_anomalies() {
                warning(format!(
                    "{} entr{} excluded (run `check` for details)",
                    bucket.anomalies.len(),
                    if bucket.anomalies.len() == 1 { "y" } else { "ies" }
                ));
            }
        }
    }
    Ok(())
}

/// Hour ruler plus one row of 96 cells per status and its total.
pub fn render_grid(bucket: &DailyBucket, color: bool, decimals: usize) -> String {
    let mut out = String::new();

    // Header row: hours
    out.push_str(&pad_right("", LABEL_WIDTH));
    for hour in 0..SLOTS_PER_DAY / 4 {
        out.push_str(&format!("{:<4}", format!("{hour:02}")));
    }
    out.push_str(" Total\n");

    for status in DutyStatus::ALL {
        let row = bucket.slot_coverage.row(status);

        out.push_str(&pad_right(status.label(), LABEL_WIDTH));
        for covered in row.iter() {
            if covered {
                out.push_str(&paint_status(COVERED, status, color));
            } else {
                out.push_str(&grey(FREE, color));
            }
        }
        out.push(' ');
        out.push_str(&format_decimal_hours(bucket.hours(status), decimals));
        out.push('\n');
    }

    out
}
