//! hosgrid library root.
//! Exposes the aggregation engine (`core`, `models`), the entry loader,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

pub use crate::core::{
    CANONICAL_DAY_BOUNDARY, DayBoundary, HosEngine, OpenEntryPolicy, bucket_by_day,
    compute_slot_coverage, compute_total_hours, daily_summary, find_anomalies,
};

use clap::Parser;
use cli::AppContext;
use cli::parser::{Cli, Commands};
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Grid { .. } => cli::commands::grid::handle(&cli.command, ctx),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
    }
}

/// Logging goes to stderr so it never mixes with grids and tables.
/// `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // a second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging
    init_logging(cli.verbose);

    // 3️⃣ init must work even when the existing config is broken
    if matches!(cli.command, Commands::Init) {
        return cli::commands::init::handle(&cli);
    }

    // 4️⃣ config + overrides, resolved once
    let ctx = AppContext::from_cli(&cli)?;

    dispatch(&cli, &ctx)
}
