use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::Point;

/// A straight line `y = slope * x + intercept`.
///
/// Equality compares the bit patterns of both fields, so two gradients that
/// only differ by rounding (or by the sign of a zero) are distinct.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Gradient {
    slope: f64,
    intercept: f64,
}

impl Gradient {
    #[must_use]
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Line through two points, or `None` when both share the same x.
    #[must_use]
    pub fn from_points(first: Point, second: Point) -> Option<Self> {
        let rise = second.y - first.y;
        let run = second.x - first.x;

        if run == 0.0 {
            return None;
        }

        let slope = rise / run;
        Some(Self::new(slope, -(slope * first.x) + first.y))
    }

    #[must_use]
    pub const fn slope(&self) -> f64 {
        self.slope
    }

    #[must_use]
    pub const fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Replace the intercept, keeping the slope.
    #[must_use]
    pub const fn with_intercept(mut self, intercept: f64) -> Self {
        self.intercept = intercept;
        self
    }

    #[must_use]
    pub fn y_from_x(&self, x: f64) -> f64 {
        (self.slope * x) + self.intercept
    }

    /// Solve for x at the given y.
    ///
    /// The slope must be non-zero; a flat line yields an infinite or NaN x.
    #[must_use]
    pub fn x_from_y(&self, y: f64) -> f64 {
        (y - self.intercept) / self.slope
    }

    #[must_use]
    pub fn point_at_x(&self, x: f64) -> Point {
        Point::new(x, self.y_from_x(x))
    }

    /// See [`Self::x_from_y`] for the non-zero slope precondition.
    #[must_use]
    pub fn point_at_y(&self, y: f64) -> Point {
        Point::new(self.x_from_y(y), y)
    }

    /// Average this line's slope with `other`'s, then pick the intercept that
    /// puts `anchor` exactly on the result.
    ///
    /// Anchoring instead of averaging intercepts keeps rounding error from
    /// compounding when averages are chained over many segments.
    #[must_use]
    pub fn average_with(&self, other: &Self, anchor: Point) -> Self {
        let average = Self::new((self.slope + other.slope) / 2.0, 0.0);
        let predicted = average.y_from_x(anchor.x);
        average.with_intercept(anchor.y - predicted)
    }
}

impl PartialEq for Gradient {
    fn eq(&self, other: &Self) -> bool {
        self.slope.to_bits() == other.slope.to_bits()
            && self.intercept.to_bits() == other.intercept.to_bits()
    }
}

impl Eq for Gradient {}

impl Hash for Gradient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slope.to_bits().hash(state);
        self.intercept.to_bits().hash(state);
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "m={:.p$} c={:.p$}", self.slope, self.intercept),
            None => write!(f, "m={} c={}", self.slope, self.intercept),
        }
    }
}

#[cfg(test)]
#[path = "gradient_tests.rs"]
mod tests;
