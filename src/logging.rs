//! Logger initialization on top of the `log` facade.

use std::sync::Once;

use log::LevelFilter;

use crate::output::ColorMode;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "trend_cross::extrapolate=trace") and takes precedence over `level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LevelFilter,
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Warn,
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Configuration from the `-v` count and `-q` flag, honouring `RUST_LOG`.
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        Self {
            level: level_for(verbose, quiet),
            env_filter: std::env::var("RUST_LOG").ok(),
            ..Self::default()
        }
    }

    /// Match log coloring to the report color mode.
    #[must_use]
    pub fn with_color(mut self, mode: ColorMode) -> Self {
        self.write_style = write_style_for(mode);
        self
    }
}

/// `env_logger` write style for a color mode.
#[must_use]
pub const fn write_style_for(mode: ColorMode) -> env_logger::WriteStyle {
    match mode {
        ColorMode::Auto => env_logger::WriteStyle::Auto,
        ColorMode::Always => env_logger::WriteStyle::Always,
        ColorMode::Never => env_logger::WriteStyle::Never,
    }
}

/// Map CLI verbosity to a log level. `quiet` wins over any `-v`.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(config.level);
        }

        builder.write_style(config.write_style);
        builder.format_timestamp(None);
        builder.init();

        log::debug!("logging initialized");
    });
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
