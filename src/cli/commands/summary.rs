use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::core::daily_summary;
use crate::errors::AppResult;
use crate::models::DutyStatus;
use crate::ui::messages::warning;
use crate::utils::formatting::separator;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_decimal_hours;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Summary { input, range } = cmd {
        let buckets = ctx.load_buckets(input, range)?;

        if buckets.is_empty() {
            warning("No duty log days found.");
            return Ok(());
        }

        let decimals = ctx.cfg.hours_decimals;
        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Driving", 8),
            Column::new("On Duty", 8),
            Column::new("Off Duty", 8),
            Column::new("Sleeper", 8),
            Column::new("Excluded", 8),
        ]);

        let mut driving_total = 0.0;
        for bucket in &buckets {
            let s = daily_summary(bucket);
            driving_total += s.driving_hours;
            table.add_row(vec![
                s.date.to_string(),
                format_decimal_hours(s.hours(DutyStatus::Driving), decimals),
                format_decimal_hours(s.hours(DutyStatus::OnDutyNotDriving), decimals),
                format_decimal_hours(s.hours(DutyStatus::OffDuty), decimals),
                format_decimal_hours(s.hours(DutyStatus::SleeperBerth), decimals),
                bucket.anomalies.len().to_string(),
            ]);
        }

        println!("📊 Daily summary ({})\n", ctx.engine.boundary);
        print!("{}", table.render());
        println!("{}", separator(&ctx.cfg.separator_char, 60));
        println!(
            "Days: {} | Driving: {} h",
            buckets.len(),
            format_decimal_hours(driving_total, decimals)
        );
    }
    Ok(())
}
