use rayon::prelude::*;

use crate::cli::{Cli, ConvergeArgs};
use crate::dataset::Dataset;
use crate::extrapolate::analyze_convergence;
use crate::output::Report;
use crate::{EXIT_CONFIG_ERROR, Result, TrendCrossError};

use super::context::{ReportContext, print_error};

#[must_use]
pub fn run_converge(args: &ConvergeArgs, cli: &Cli) -> i32 {
    match run_converge_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_converge_impl(args: &ConvergeArgs, cli: &Cli) -> Result<i32> {
    let ctx = ReportContext::new(&args.report, cli)?;
    let dataset = ctx.load_dataset()?;

    let reports = if args.all {
        all_pair_reports(&dataset)?
    } else {
        let (Some(first), Some(second)) = (&args.first, &args.second) else {
            return Err(TrendCrossError::Config(
                "converge needs two series names or --all".to_string(),
            ));
        };
        vec![convergence_report(&dataset, first, second)?]
    };

    ctx.emit(&reports, cli)
}

/// Convergence of `first`'s trend with `second`'s.
///
/// # Errors
/// Returns `UnknownSeries` if either name is missing from the dataset.
pub fn convergence_report(dataset: &Dataset, first: &str, second: &str) -> Result<Report> {
    let result = analyze_convergence(dataset.get(first)?, dataset.get(second)?);
    log::info!("{first} x {second}: {}", result.describe());

    Ok(Report::Convergence {
        first: first.to_string(),
        second: second.to_string(),
        result,
    })
}

/// Convergence of every ordered series pair, evaluated in parallel.
///
/// Reports come back in [`Dataset::ordered_pairs`] order.
///
/// # Errors
/// Returns a `Config` error when the dataset has fewer than two series.
pub fn all_pair_reports(dataset: &Dataset) -> Result<Vec<Report>> {
    if dataset.len() < 2 {
        return Err(TrendCrossError::Config(format!(
            "converge --all needs at least two series, data file has {}",
            dataset.len()
        )));
    }

    dataset
        .ordered_pairs()
        .par_iter()
        .map(|&(first, second)| convergence_report(dataset, first, second))
        .collect()
}

#[cfg(test)]
#[path = "converge_tests.rs"]
mod tests;
