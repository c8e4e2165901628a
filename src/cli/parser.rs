use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hosgrid
/// CLI application to aggregate Hours-of-Service duty logs
#[derive(Parser)]
#[command(
    name = "hosgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hours-of-Service duty logs: 15-minute grids, per-status totals, daily summaries",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Zone that cuts the days (UTC or an offset like +02:00)
    #[arg(global = true, long = "tz", value_name = "ZONE")]
    pub tz: Option<String>,

    /// Count ongoing entries up to this instant instead of the end of their day
    #[arg(global = true, long = "now", value_name = "RFC3339")]
    pub now: Option<String>,

    /// Verbose logging (debug level)
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with defaults
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List keys missing from the configuration file")]
        check: bool,
    },

    /// Draw the 96-slot duty grid for each day
    Grid {
        #[arg(long, short = 'i', value_name = "FILE", help = "Duty log file (.json or .csv)")]
        input: String,

        #[arg(long, short = 'r', help = "Filter by year/month/day or a custom range")]
        range: Option<String>,
    },

    /// Print per-day totals for every duty status
    Summary {
        #[arg(long, short = 'i', value_name = "FILE", help = "Duty log file (.json or .csv)")]
        input: String,

        #[arg(long, short = 'r', help = "Filter by year/month/day or a custom range")]
        range: Option<String>,
    },

    /// List log entries day by day
    List {
        #[arg(long, short = 'i', value_name = "FILE", help = "Duty log file (.json or .csv)")]
        input: String,

        #[arg(long, short = 'r', help = "Filter by year/month/day or a custom range")]
        range: Option<String>,
    },

    /// Report entries excluded from the aggregation
    Check {
        #[arg(long, short = 'i', value_name = "FILE", help = "Duty log file (.json or .csv)")]
        input: String,
    },

    /// Export daily totals or the slot grid
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'i', value_name = "FILE", help = "Duty log file (.json or .csv)")]
        input: String,

        #[arg(long, value_name = "FILE", help = "Absolute output path")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Export the per-status slot grid instead of daily totals")]
        slots: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
