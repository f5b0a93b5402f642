//! Trend extrapolation over ordered point sequences.
//!
//! Every operation is pure: a degenerate input (too few points, a vertical
//! segment, parallel lines, lines that already crossed) produces `None`
//! rather than an error.

mod convergence;
mod fit;

pub use convergence::{
    Convergence, analyze_convergence, convergence_of, convergence_with_x, convergence_with_y,
};
pub use fit::{MIN_POINTS, fit_gradient};
