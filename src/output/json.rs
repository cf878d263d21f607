//! JSON output formatter.
//!
//! Serializes the whole report, diagnostics included, so callers can consume
//! a failed run's messages from stdout as well.

use super::formatter::OutputFormatter;
use crate::report::Report;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> String {
        serde_json::to_string_pretty(report).expect("JSON serialization should not fail")
    }

    fn logs_diagnostics(&self) -> bool {
        false
    }
}
