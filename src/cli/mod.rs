pub mod commands;
pub mod parser;

use crate::config::Config;
use crate::core::HosEngine;
use crate::errors::AppResult;
use crate::models::{DailyBucket, LogEntry};
use crate::source::load_entries;
use crate::utils::date::{in_bounds, resolve_range};
use crate::utils::time::parse_optional_now;
use parser::Cli;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Settings resolved once per invocation: config file, CLI overrides, engine policy.
pub struct AppContext {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub engine: HosEngine,
    pub color: bool,
}

impl AppContext {
    pub fn config_path(cli: &Cli) -> PathBuf {
        cli.config
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(Config::config_file)
    }

    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let config_path = Self::config_path(cli);
        let mut cfg = Config::load(&config_path)?;

        if let Some(tz) = &cli.tz {
            cfg.timezone = tz.clone();
        }

        let boundary = cfg.day_boundary()?;
        let now = parse_optional_now(cli.now.as_ref(), boundary)?;
        let engine = HosEngine::new(boundary, cfg.open_policy(now));
        let color = cfg.color && io::stdout().is_terminal();

        debug!(
            config = %config_path.display(),
            %boundary,
            open = ?engine.open_entries,
            "context ready"
        );

        Ok(Self {
            cfg,
            config_path,
            engine,
            color,
        })
    }

    pub fn load_entries(&self, input: &str) -> AppResult<Vec<LogEntry>> {
        load_entries(Path::new(input), self.engine.boundary)
    }

    /// Load `input`, aggregate it and keep the days inside `range`.
    pub fn load_buckets(
        &self,
        input: &str,
        range: &Option<String>,
    ) -> AppResult<Vec<DailyBucket>> {
        let bounds = resolve_range(range)?;
        let entries = self.load_entries(input)?;

        Ok(self
            .engine
            .bucket_by_day(&entries)
            .into_values()
            .filter(|b| in_bounds(b.date, bounds))
            .collect())
    }
}
