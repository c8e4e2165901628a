use crate::core::{DayBoundary, OpenEntryPolicy};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Every key a complete configuration file carries.
pub const CONFIG_KEYS: [&str; 5] = [
    "timezone",
    "open_entries",
    "hours_decimals",
    "separator_char",
    "color",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Zone that cuts the days: "UTC" or an offset like "+02:00"
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// "end-of-day" or "now"
    #[serde(default = "default_open_entries")]
    pub open_entries: String,
    #[serde(default = "default_hours_decimals")]
    pub hours_decimals: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_timezone() -> String {
    "UTC".to_string()
}
fn default_open_entries() -> String {
    "end-of-day".to_string()
}
fn default_hours_decimals() -> usize {
    2
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            open_entries: default_open_entries(),
            hours_decimals: default_hours_decimals(),
            separator_char: default_separator_char(),
            color: default_color(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (~/.hosgrid)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hosgrid")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hosgrid.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is missing
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write a default configuration file at `path`.
    /// In test mode nothing is written.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<Self> {
        let config = Config::default();

        if !is_test {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(path)?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.day_boundary()?;
        match self.open_entries.as_str() {
            "end-of-day" | "now" => Ok(()),
            other => Err(AppError::Config(format!(
                "open_entries must be 'end-of-day' or 'now', found '{other}'"
            ))),
        }
    }

    pub fn day_boundary(&self) -> AppResult<DayBoundary> {
        DayBoundary::parse(&self.timezone)
            .ok_or_else(|| AppError::InvalidTimezone(self.timezone.clone()))
    }

    /// An explicit `now` always wins; otherwise the configured policy applies.
    pub fn open_policy(&self, now: Option<DateTime<Utc>>) -> OpenEntryPolicy {
        match (now, self.open_entries.as_str()) {
            (Some(now), _) => OpenEntryPolicy::ReferenceNow(now),
            (None, "now") => OpenEntryPolicy::ReferenceNow(Utc::now()),
            (None, _) => OpenEntryPolicy::EndOfDay,
        }
    }

    /// Keys absent from a raw configuration file.
    pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;
        let Some(map) = value.as_mapping() else {
            return Ok(CONFIG_KEYS.to_vec());
        };

        Ok(CONFIG_KEYS
            .iter()
            .filter(|key| !map.contains_key(**key))
            .copied()
            .collect())
    }
}
