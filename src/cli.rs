use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "trend-cross")]
#[command(author, version, about = "Project where piecewise-linear trends converge")]
#[command(long_about = "Fits a trend line to each named point series in a data file and \
    reports where trends cross, or where a trend reaches a target x or y.\n\n\
    Exit codes:\n  \
    0 - Every requested result was found\n  \
    1 - At least one result does not exist for the given data\n  \
    2 - Configuration or input error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress report output and non-error logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true, conflicts_with = "config")]
    pub no_config: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the fitted gradient of one or more series
    Gradient(GradientArgs),

    /// Find where the trends of two series converge
    Converge(ConvergeArgs),

    /// Project a series' trend to a target x
    AtX(ProjectArgs),

    /// Project a series' trend to a target y
    AtY(ProjectArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Options shared by every command that prints reports.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Data file with `[[series]]` entries (.toml or .json)
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Decimal places in text output
    #[arg(short, long)]
    pub precision: Option<usize>,
}

#[derive(Args, Debug)]
pub struct GradientArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Series names
    #[arg(required = true)]
    pub series: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ConvergeArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Series whose last point bounds the convergence
    #[arg(required_unless_present = "all")]
    pub first: Option<String>,

    /// Series intersected with the first
    #[arg(required_unless_present = "all")]
    pub second: Option<String>,

    /// Check every ordered pair of series in the data file
    #[arg(long, conflicts_with_all = ["first", "second"])]
    pub all: bool,
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Series name
    pub series: String,

    /// Target coordinate
    #[arg(allow_negative_numbers = true)]
    pub target: f64,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".trend-cross.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate a configuration file
    Validate {
        /// Path to configuration file
        #[arg(default_value = ".trend-cross.toml")]
        path: PathBuf,
    },

    /// Show the effective configuration
    Show {
        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
