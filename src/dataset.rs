//! Named point series loaded from TOML or JSON data files.
//!
//! ```toml
//! [[series]]
//! name = "open"
//! points = [[0, 10], [1, 12], [2, 13]]
//! ```

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Result, TrendCrossError};
use crate::geometry::Point;

#[derive(Debug, Deserialize)]
struct DataFile {
    #[serde(default)]
    series: Vec<SeriesRecord>,
}

#[derive(Debug, Deserialize)]
struct SeriesRecord {
    name: String,
    points: Vec<Point>,
}

/// Series in file order, keyed by unique name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    series: IndexMap<String, Vec<Point>>,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a data file, picking the parser from its extension.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// fails to parse, or repeats a series name.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TrendCrossError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let dataset = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => {
                return Err(TrendCrossError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        log::info!("loaded {} series from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    /// # Errors
    /// Returns an error on invalid TOML or a duplicate series name.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_records(toml::from_str::<DataFile>(content)?.series)
    }

    /// # Errors
    /// Returns an error on invalid JSON or a duplicate series name.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_records(serde_json::from_str::<DataFile>(content)?.series)
    }

    fn from_records(records: Vec<SeriesRecord>) -> Result<Self> {
        let mut dataset = Self::new();
        for record in records {
            dataset.insert(record.name, record.points)?;
        }
        Ok(dataset)
    }

    /// Add a series.
    ///
    /// # Errors
    /// Returns `DuplicateSeries` if the name is already taken.
    pub fn insert(&mut self, name: impl Into<String>, points: Vec<Point>) -> Result<()> {
        let name = name.into();
        if self.series.contains_key(&name) {
            return Err(TrendCrossError::DuplicateSeries(name));
        }
        self.series.insert(name, points);
        Ok(())
    }

    /// Points of the named series.
    ///
    /// # Errors
    /// Returns `UnknownSeries` if no series has that name.
    pub fn get(&self, name: &str) -> Result<&[Point]> {
        self.series
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| TrendCrossError::UnknownSeries(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Every ordered pair of distinct series, in file order.
    #[must_use]
    pub fn ordered_pairs(&self) -> Vec<(&str, &str)> {
        let names: Vec<&str> = self.names().collect();
        names
            .iter()
            .flat_map(|&first| {
                names
                    .iter()
                    .filter(move |&&second| second != first)
                    .map(move |&second| (first, second))
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
