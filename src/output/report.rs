use serde::Serialize;

use crate::extrapolate::Convergence;
use crate::geometry::{Gradient, Point};

/// Axis a single trend is projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// One computed answer, ready to be formatted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Gradient {
        series: String,
        gradient: Option<Gradient>,
    },
    Convergence {
        first: String,
        second: String,
        result: Convergence,
    },
    Projection {
        series: String,
        axis: Axis,
        target: f64,
        point: Option<Point>,
    },
}

impl Report {
    /// Whether the report carries an actual result.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        match self {
            Self::Gradient { gradient, .. } => gradient.is_some(),
            Self::Convergence { result, .. } => result.point().is_some(),
            Self::Projection { point, .. } => point.is_some(),
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
