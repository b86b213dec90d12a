//! `wakflo config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `wakflo config get`.
const KEYS: [&str; 6] = [
    "backend.url",
    "backend.timeout_secs",
    "defaults.authors",
    "defaults.categories",
    "defaults.version",
    "output.no_color",
];

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "backend.url" => Ok(config.backend.url.clone()),
        "backend.timeout_secs" => Ok(config.backend.timeout_secs.to_string()),
        "defaults.authors" => Ok(config.defaults.authors.join(", ")),
        "defaults.categories" => Ok(config.defaults.categories.join(", ")),
        "defaults.version" => Ok(config.defaults.version.clone()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key '{key}', expected one of: {}", KEYS.join(", ")),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
