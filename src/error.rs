use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendCrossError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown series: {0}")]
    UnknownSeries(String),

    #[error("Duplicate series name: {0}")]
    DuplicateSeries(String),

    #[error("Unsupported data file format: {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl TrendCrossError {
    /// Stable name of the error variant, used in machine readable output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::Json(_) => "Json",
            Self::UnknownSeries(_) => "UnknownSeries",
            Self::DuplicateSeries(_) => "DuplicateSeries",
            Self::UnsupportedFormat { .. } => "UnsupportedFormat",
        }
    }

    /// Hint for resolving the error, when there is an obvious one.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format, or run `trend-cross init` for a template")
            }
            Self::FileAccess { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("Check the file permissions"),
                _ => None,
            },
            Self::UnknownSeries(_) => {
                Some("Series names are case-sensitive; see `[[series]]` in the data file")
            }
            Self::UnsupportedFormat { .. } => {
                Some("Rename the data file to use a .toml or .json extension")
            }
            Self::Io(_) | Self::Json(_) | Self::DuplicateSeries(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrendCrossError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
