use crate::cli::{Cli, ProjectArgs};
use crate::dataset::Dataset;
use crate::extrapolate::{convergence_with_x, convergence_with_y};
use crate::output::{Axis, Report};
use crate::{EXIT_CONFIG_ERROR, Result};

use super::context::{ReportContext, print_error};

#[must_use]
pub fn run_project(args: &ProjectArgs, axis: Axis, cli: &Cli) -> i32 {
    match run_project_impl(args, axis, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_project_impl(args: &ProjectArgs, axis: Axis, cli: &Cli) -> Result<i32> {
    let ctx = ReportContext::new(&args.report, cli)?;
    let dataset = ctx.load_dataset()?;
    let report = projection_report(&dataset, &args.series, axis, args.target)?;
    ctx.emit(&[report], cli)
}

/// Where the trend of `series` reaches `target` on `axis`.
///
/// # Errors
/// Returns `UnknownSeries` if the series is missing from the dataset.
pub fn projection_report(
    dataset: &Dataset,
    series: &str,
    axis: Axis,
    target: f64,
) -> Result<Report> {
    let points = dataset.get(series)?;
    let point = match axis {
        Axis::X => convergence_with_x(points, target),
        Axis::Y => convergence_with_y(points, target),
    };

    Ok(Report::Projection {
        series: series.to_string(),
        axis,
        target,
        point,
    })
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
