use crate::cli::{Cli, GradientArgs};
use crate::dataset::Dataset;
use crate::extrapolate::fit_gradient;
use crate::output::Report;
use crate::{EXIT_CONFIG_ERROR, Result};

use super::context::{ReportContext, print_error};

#[must_use]
pub fn run_gradient(args: &GradientArgs, cli: &Cli) -> i32 {
    match run_gradient_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_gradient_impl(args: &GradientArgs, cli: &Cli) -> Result<i32> {
    let ctx = ReportContext::new(&args.report, cli)?;
    let dataset = ctx.load_dataset()?;
    let reports = gradient_reports(&dataset, &args.series)?;
    ctx.emit(&reports, cli)
}

/// Fitted gradient of each named series, in the order given.
///
/// # Errors
/// Returns `UnknownSeries` for a name missing from the dataset.
pub fn gradient_reports(dataset: &Dataset, names: &[String]) -> Result<Vec<Report>> {
    names
        .iter()
        .map(|name| {
            Ok(Report::Gradient {
                series: name.clone(),
                gradient: fit_gradient(dataset.get(name)?),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "gradient_tests.rs"]
mod tests;
