// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{CoverageExport, SummaryExport, coverage_rows};
use crate::models::DailyBucket;
use crate::ui::messages::warning;
use crate::utils::date::in_bounds;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// High-level export of aggregated days.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the buckets falling inside `bounds`.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path
    /// - `slots`: export the per-status grid instead of the daily totals
    pub fn export(
        buckets: &BTreeMap<NaiveDate, DailyBucket>,
        format: ExportFormat,
        file: &str,
        bounds: Option<(NaiveDate, NaiveDate)>,
        slots: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let selected: Vec<&DailyBucket> = buckets
            .values()
            .filter(|b| in_bounds(b.date, bounds))
            .collect();

        if selected.is_empty() {
            warning("No duty log days found for selected range.");
            return Ok(());
        }

        debug!(
            format = format.as_str(),
            days = selected.len(),
            slots,
            file = %path.display(),
            "exporting duty log"
        );

        if slots {
            let rows: Vec<CoverageExport> = selected.into_iter().flat_map(coverage_rows).collect();
            write_rows(&rows, format, path)
        } else {
            let rows: Vec<SummaryExport> = selected.into_iter().map(SummaryExport::from).collect();
            write_rows(&rows, format, path)
        }
    }
}

fn write_rows<T: serde::Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
