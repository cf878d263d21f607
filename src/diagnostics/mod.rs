//! Diagnostic reporting for argument processing.
//!
//! Everything that can go wrong with the user's tokens (unknown arguments,
//! repeated arguments, missing mandatory arguments, invalid values) is
//! reported as a human-readable message through a [`DiagnosticSink`]. The
//! engine never decides how messages are displayed; the caller picks a sink.

pub mod log_sink;
pub mod recording;

pub use log_sink::LogSink;
pub use recording::{Diagnostic, RecordingSink};

use serde::Serialize;

/// How serious a reported message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// Receives the messages produced while processing arguments.
///
/// Implementations are called synchronously, once per message, in the order
/// the messages are discovered.
pub trait DiagnosticSink {
    fn error(&mut self, message: &str);

    fn warning(&mut self, message: &str);

    fn info(&mut self, message: &str);

    /// Dispatches a message by severity.
    fn emit(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => self.error(message),
            Severity::Warning => self.warning(message),
            Severity::Info => self.info(message),
        }
    }
}
