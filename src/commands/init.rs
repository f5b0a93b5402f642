use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, TrendCrossError};

use super::context::print_error;

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            println!("Created configuration file: {}", args.output.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(TrendCrossError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# trend-cross configuration file
version = "1"

[output]
# Report format: "text" or "json" (default: text)
format = "text"

# Decimal places in text output, 0 to 17 (default: 6)
precision = 6

[data]
# Data file used when --data is not given (.toml or .json)
# path = "series.toml"
#
# Data file layout:
#
# [[series]]
# name = "open"
# points = [[0, 10], [1, 12], [2, 13]]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
