use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrendCrossError};
use crate::output::{DEFAULT_PRECISION, OutputFormat};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Largest useful number of decimals for an `f64`.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config format version; absent means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub data: DataConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Report format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Decimal places in text output.
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

const fn default_precision() -> usize {
    DEFAULT_PRECISION
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataConfig {
    /// Data file used when `--data` is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Check values that parse fine but make no sense.
    ///
    /// # Errors
    /// Returns a `Config` error for an unsupported version or precision.
    pub fn validate(&self) -> Result<()> {
        if let Some(version) = &self.version
            && version != CONFIG_VERSION
        {
            return Err(TrendCrossError::Config(format!(
                "Unsupported config version '{version}'. Only version '{CONFIG_VERSION}' is supported."
            )));
        }

        if self.output.precision > MAX_PRECISION {
            return Err(TrendCrossError::Config(format!(
                "output.precision must be at most {MAX_PRECISION}, got {}",
                self.output.precision
            )));
        }

        if self
            .data
            .path
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(TrendCrossError::Config(
                "data.path cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
