use serde::Serialize;

use crate::error::Result;

use super::{Report, ReportFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    reports: &'a [Report],
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    found: usize,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, reports: &[Report]) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total: reports.len(),
                found: reports.iter().filter(|r| r.is_found()).count(),
            },
            reports,
        };

        Ok(serde_json::to_string_pretty(&output)? + "\n")
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
