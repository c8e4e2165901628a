use crate::cli::AppContext;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", ctx.config_path.display());
            println!("{}", serde_yaml::to_string(&ctx.cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !ctx.config_path.exists() {
                warning(format!(
                    "No configuration file at {}; defaults are in use.",
                    ctx.config_path.display()
                ));
                return Ok(());
            }

            let content = fs::read_to_string(&ctx.config_path)?;
            let missing = Config::missing_keys(&content)?;

            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for key in &missing {
                    warning(format!("Missing key '{key}' (default value applies)"));
                }
            }
        }

        if !*print_config && !*check {
            info("Nothing to do: use --print or --check");
        }
    }

    Ok(())
}
