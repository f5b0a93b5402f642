use std::fmt::Write;

use crate::error::Result;
use crate::extrapolate::Convergence;

use super::{Report, ReportFormatter};

/// Decimal places printed when no precision is configured.
pub const DEFAULT_PRECISION: usize = 6;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    precision: usize,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_precision(mode, DEFAULT_PRECISION)
    }

    #[must_use]
    pub fn with_precision(mode: ColorMode, precision: usize) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            precision,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, found: bool) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let color = if found { ansi::GREEN } else { ansi::RED };
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_report(&self, report: &Report, output: &mut String) {
        let p = self.precision;
        let found = report.is_found();
        let icon = self.colorize(if found { "✓" } else { "✗" }, found);

        let _ = match report {
            Report::Gradient { series, gradient } => match gradient {
                Some(gradient) => writeln!(output, "{icon} {series}: {gradient:.p$}"),
                None => writeln!(
                    output,
                    "{icon} {series}: no gradient (needs two points and no vertical segment)"
                ),
            },
            Report::Convergence {
                first,
                second,
                result,
            } => {
                let detail = match result {
                    Convergence::Converges { point } => format!("converges at {point:.p$}"),
                    Convergence::Coincident { point } => {
                        format!("coincident, reported at {point:.p$}")
                    }
                    Convergence::Diverged { intersection } => {
                        format!("{} (crossed at {intersection:.p$})", result.describe())
                    }
                    Convergence::TooFewPoints
                    | Convergence::VerticalSegment
                    | Convergence::Parallel => result.describe().to_string(),
                };
                writeln!(output, "{icon} {first} x {second}: {detail}")
            }
            Report::Projection {
                series,
                axis,
                target,
                point,
            } => match point {
                Some(point) => writeln!(output, "{icon} {series} at {axis}={target}: {point:.p$}"),
                None => writeln!(output, "{icon} {series} at {axis}={target}: unreachable"),
            },
        };
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, reports: &[Report]) -> Result<String> {
        let mut output = String::new();

        for report in reports {
            self.format_report(report, &mut output);
        }

        if reports.len() > 1 {
            let found = reports.iter().filter(|r| r.is_found()).count();
            let _ = writeln!(
                output,
                "\nSummary: {} results, {found} found, {} without result",
                reports.len(),
                reports.len() - found
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
