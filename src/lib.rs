//! Project where piecewise-linear trends converge.
//!
//! ```
//! use trend_cross::extrapolate::convergence_of;
//! use trend_cross::geometry::Point;
//!
//! let rising = [Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
//! let level = [Point::new(2.0, 3.0), Point::new(3.0, 3.0)];
//! assert_eq!(convergence_of(&rising, &level), Some(Point::new(3.0, 3.0)));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extrapolate;
pub mod geometry;
pub mod logging;
pub mod output;

pub use error::{Result, TrendCrossError};
pub use extrapolate::{convergence_of, convergence_with_x, convergence_with_y, fit_gradient};
pub use geometry::{Gradient, Point};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_NO_RESULT: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
