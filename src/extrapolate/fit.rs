use crate::geometry::{Gradient, Point};

/// Fewest points a sequence needs before a gradient can be fitted.
pub const MIN_POINTS: usize = 2;

/// Fit a single gradient to an ordered point sequence.
///
/// The first segment's gradient is folded left-to-right with each following
/// segment's gradient via [`Gradient::average_with`], re-anchoring on the
/// newest point every time. This is order dependent and is neither a least
/// squares fit nor a plain mean of the segment slopes.
///
/// Returns `None` for fewer than two points or when any segment is vertical.
#[must_use]
pub fn fit_gradient(points: &[Point]) -> Option<Gradient> {
    if points.len() < MIN_POINTS {
        log::debug!("cannot fit gradient: {} point(s)", points.len());
        return None;
    }

    let mut running = segment_gradient(points[0], points[1])?;
    for pair in points[1..].windows(2) {
        let segment = segment_gradient(pair[0], pair[1])?;
        running = running.average_with(&segment, pair[1]);
        log::trace!("folded segment {} -> {}: {running}", pair[0], pair[1]);
    }

    Some(running)
}

fn segment_gradient(from: Point, to: Point) -> Option<Gradient> {
    let gradient = Gradient::from_points(from, to);
    if gradient.is_none() {
        log::debug!("vertical segment {from} -> {to}");
    }
    gradient
}

#[cfg(test)]
#[path = "fit_tests.rs"]
mod tests;
