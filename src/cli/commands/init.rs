use crate::cli::AppContext;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Writes a default configuration file (unless running with `--test`).
/// An existing file is left untouched.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = AppContext::config_path(cli);

    if path.exists() {
        info(format!("Configuration already present: {}", path.display()));
        return Ok(());
    }

    let cfg = Config::init_all(&path, cli.test)?;

    println!("⚙️  Initializing hosgrid…");
    println!("📄 Config file : {}", path.display());
    println!("🕛 Day boundary: {}", cfg.timezone);
    println!("⏳ Open entries: {}", cfg.open_entries);

    success("hosgrid initialization completed!");
    Ok(())
}
