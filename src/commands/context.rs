//! Shared plumbing for report commands: config, data file, rendering.

use std::path::{Path, PathBuf};

use crate::cli::{Cli, ReportArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader, MAX_PRECISION};
use crate::dataset::Dataset;
use crate::output::{JsonFormatter, OutputFormat, Report, ReportFormatter, TextFormatter};
use crate::{EXIT_NO_RESULT, EXIT_SUCCESS, Result, TrendCrossError};

/// Load the effective configuration for a run.
///
/// # Errors
/// Returns an error if an explicit or discovered config file is invalid.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Print an error and its suggestion, if any, to stderr.
pub fn print_error(err: &TrendCrossError) {
    eprintln!("Error: {err}");
    if let Some(suggestion) = err.suggestion() {
        eprintln!("  help: {suggestion}");
    }
}

/// Config merged with per-command overrides for one report command.
#[derive(Debug)]
pub struct ReportContext {
    pub data_path: PathBuf,
    pub format: OutputFormat,
    pub precision: usize,
}

impl ReportContext {
    /// # Errors
    /// Returns an error if config loading fails, no data file is known, or
    /// the requested precision is out of range.
    pub fn new(args: &ReportArgs, cli: &Cli) -> Result<Self> {
        let config = load_config(cli.config.as_deref(), cli.no_config)?;
        Self::with_config(&config, args)
    }

    /// # Errors
    /// See [`Self::new`].
    pub fn with_config(config: &Config, args: &ReportArgs) -> Result<Self> {
        let data_path = args
            .data
            .clone()
            .or_else(|| config.data.path.clone())
            .ok_or_else(|| {
                TrendCrossError::Config(
                    "No data file given: pass --data or set data.path in the config".to_string(),
                )
            })?;

        let precision = args.precision.unwrap_or(config.output.precision);
        if precision > MAX_PRECISION {
            return Err(TrendCrossError::Config(format!(
                "precision must be at most {MAX_PRECISION}, got {precision}"
            )));
        }

        Ok(Self {
            format: args.format.unwrap_or(config.output.format),
            precision,
            data_path,
        })
    }

    /// # Errors
    /// Returns an error if the data file cannot be loaded.
    pub fn load_dataset(&self) -> Result<Dataset> {
        Dataset::load(&self.data_path)
    }

    /// # Errors
    /// Returns an error if formatting fails.
    pub fn render(&self, reports: &[Report], cli: &Cli) -> Result<String> {
        match self.format {
            OutputFormat::Text => {
                TextFormatter::with_precision(cli.color.into(), self.precision).format(reports)
            }
            OutputFormat::Json => JsonFormatter.format(reports),
        }
    }

    /// Render and print the reports, returning the exit code they imply.
    ///
    /// # Errors
    /// Returns an error if formatting fails.
    pub fn emit(&self, reports: &[Report], cli: &Cli) -> Result<i32> {
        let output = self.render(reports, cli)?;
        if !cli.quiet {
            print!("{output}");
        }
        Ok(exit_code_for(reports))
    }
}

/// `EXIT_SUCCESS` when every report found a result, `EXIT_NO_RESULT` otherwise.
#[must_use]
pub fn exit_code_for(reports: &[Report]) -> i32 {
    if reports.iter().all(Report::is_found) {
        EXIT_SUCCESS
    } else {
        EXIT_NO_RESULT
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
