use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::OutputFormat;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, TrendCrossError};

use super::context::{load_config, print_error};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { path } => run_config_validate(path),
        ConfigAction::Show { format } => run_config_show(*format, cli),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(TrendCrossError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(format: OutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(cli.config.as_deref(), cli.no_config, format) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    no_config: bool,
    format: OutputFormat,
) -> Result<String> {
    let config = load_config(config_path, no_config)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => Ok(format_config_text(&config)),
    }
}

#[must_use]
pub fn format_config_text(config: &Config) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");

    if let Some(version) = &config.version {
        let _ = writeln!(output, "version = \"{version}\"\n");
    }

    output.push_str("[output]\n");
    let _ = writeln!(output, "  format = \"{}\"", config.output.format);
    let _ = writeln!(output, "  precision = {}", config.output.precision);

    output.push_str("\n[data]\n");
    match &config.data.path {
        Some(path) => {
            let _ = writeln!(output, "  path = \"{}\"", path.display());
        }
        None => output.push_str("  path = (none)\n"),
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
