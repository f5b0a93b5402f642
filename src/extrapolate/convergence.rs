use serde::Serialize;

use crate::geometry::{Gradient, Point};

use super::fit::{MIN_POINTS, fit_gradient};

/// Outcome of intersecting two fitted trends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Convergence {
    /// The trends meet at or beyond the last known point of the first series.
    Converges { point: Point },
    /// Both series fit exactly the same line; reported at the first
    /// series' last point.
    Coincident { point: Point },
    /// One of the series has fewer than two points.
    TooFewPoints,
    /// One of the series contains two consecutive points with the same x.
    VerticalSegment,
    /// Equal slopes with different intercepts never meet.
    Parallel,
    /// The lines met before the last known point of the first series.
    Diverged { intersection: Point },
}

impl Convergence {
    /// The convergence point, if the trends converge going forward.
    #[must_use]
    pub const fn point(&self) -> Option<Point> {
        match self {
            Self::Converges { point } | Self::Coincident { point } => Some(*point),
            Self::TooFewPoints | Self::VerticalSegment | Self::Parallel | Self::Diverged { .. } => {
                None
            }
        }
    }

    /// Short human readable reason, used by text output.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::Converges { .. } => "converges",
            Self::Coincident { .. } => "coincident",
            Self::TooFewPoints => "too few points to fit a trend",
            Self::VerticalSegment => "series contains a vertical segment",
            Self::Parallel => "trends are parallel",
            Self::Diverged { .. } => "trends have already diverged",
        }
    }
}

/// Decide whether, and where, the trends of two series converge.
#[must_use]
pub fn analyze_convergence(first: &[Point], second: &[Point]) -> Convergence {
    if first.len() < MIN_POINTS || second.len() < MIN_POINTS {
        return Convergence::TooFewPoints;
    }
    let last = first[first.len() - 1];

    let (Some(g1), Some(g2)) = (fit_gradient(first), fit_gradient(second)) else {
        return Convergence::VerticalSegment;
    };

    if g1 == g2 {
        return Convergence::Coincident { point: last };
    }

    let Some(intersection) = intersection_of(&g1, &g2) else {
        return Convergence::Parallel;
    };

    if intersection.x < last.x {
        log::debug!("intersection {intersection} lies before last point {last}");
        return Convergence::Diverged { intersection };
    }

    Convergence::Converges {
        point: intersection,
    }
}

/// Point where the trends of two series meet going forward.
///
/// Returns `None` when either series has fewer than two points or a vertical
/// segment, when the trends are parallel, or when they intersect before the
/// last point of `first`. Identical trends converge at the last point of
/// `first`.
#[must_use]
pub fn convergence_of(first: &[Point], second: &[Point]) -> Option<Point> {
    analyze_convergence(first, second).point()
}

/// Point where the trend of `points` reaches `y`.
///
/// A flat trend never reaches another y, so it yields `None` as well.
#[must_use]
pub fn convergence_with_y(points: &[Point], y: f64) -> Option<Point> {
    let gradient = fit_gradient(points)?;
    if gradient.slope() == 0.0 {
        log::debug!("flat trend cannot be solved for y={y}");
        return None;
    }
    Some(gradient.point_at_y(y))
}

/// Point on the trend of `points` at `x`.
#[must_use]
pub fn convergence_with_x(points: &[Point], x: f64) -> Option<Point> {
    fit_gradient(points).map(|gradient| gradient.point_at_x(x))
}

// m1*x + c1 = m2*x + c2  =>  x = (c2 - c1) / (m1 - m2)
fn intersection_of(g1: &Gradient, g2: &Gradient) -> Option<Point> {
    let slope_difference = g1.slope() - g2.slope();
    if slope_difference == 0.0 {
        return None;
    }

    let x = (g2.intercept() - g1.intercept()) / slope_difference;
    Some(g1.point_at_x(x))
}

#[cfg(test)]
#[path = "convergence_tests.rs"]
mod tests;
