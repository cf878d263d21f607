//! Output formatter trait and factory.
//!
//! This module defines the `OutputFormatter` trait that all formatters implement,
//! and provides a factory function to create the appropriate formatter based on
//! the output format configuration.

use crate::cli::OutputFormat;
use crate::report::Report;

/// Trait for rendering a run's report into an output string.
pub trait OutputFormatter {
    /// Formats the report.
    ///
    /// Implementations decide whether failed runs produce any output; the
    /// diagnostics are always available in `report.diagnostics`.
    fn format(&self, report: &Report) -> String;

    /// Whether diagnostics must also be written to the log.
    ///
    /// Formats that embed the diagnostics in their own output return false.
    fn logs_diagnostics(&self) -> bool;
}

/// Creates the appropriate formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    use super::json::JsonFormatter;
    use super::plain::PlainFormatter;

    match format {
        OutputFormat::Plain => Box::new(PlainFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
