//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PlannerError;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or written, or if
/// `init` would overwrite an existing file without `--force`.
pub fn config(
    paths: &Paths,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, PlannerError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            match format {
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&config)?),
                OutputFormat::Pretty => config.to_yaml(),
            }
        },
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => {
            if paths.config_file.exists() && !force {
                return Err(PlannerError::Config(format!(
                    "Config file already exists: {} (use --force to overwrite)",
                    paths.config_file.display()
                )));
            }
            paths.ensure_dirs()?;
            Config::default().save_to_path(&paths.config_file)?;
            Ok(format!(
                "{} {}",
                "Wrote default config to".green(),
                paths.config_file.display()
            ))
        },
    }
}
