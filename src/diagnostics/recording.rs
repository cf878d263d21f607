//! In-memory sink.
//!
//! Used by the JSON report, which needs the messages as data, and by tests
//! that assert on message content.

use serde::Serialize;

use super::{DiagnosticSink, Severity};

/// A single recorded message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    /// Re-emits this message to another sink.
    pub fn emit_to(&self, sink: &mut dyn DiagnosticSink) {
        sink.emit(self.severity, &self.message);
    }
}

/// Sink that keeps every message, in emission order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    diagnostics: Vec<Diagnostic>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn errors(&self) -> Vec<&str> {
        self.messages_with(Severity::Error)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages_with(Severity::Warning)
    }

    pub fn infos(&self) -> Vec<&str> {
        self.messages_with(Severity::Info)
    }

    pub fn error_count(&self) -> usize {
        self.count_of(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_of(Severity::Warning)
    }

    /// Total number of messages of any severity.
    pub fn message_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns true if exactly one error contains every one of `fragments`.
    pub fn single_error_containing(&self, fragments: &[&str]) -> bool {
        self.errors()
            .into_iter()
            .filter(|message| fragments.iter().all(|f| message.contains(f)))
            .count()
            == 1
    }

    /// Returns true if at least one warning contains `fragment`.
    pub fn has_warning_containing(&self, fragment: &str) -> bool {
        self.warnings().into_iter().any(|m| m.contains(fragment))
    }

    fn messages_with(&self, severity: Severity) -> Vec<&str> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.as_str())
            .collect()
    }

    fn count_of(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    fn record(&mut self, severity: Severity, message: &str) {
        self.diagnostics.push(Diagnostic {
            severity,
            message: message.to_string(),
        });
    }
}

impl DiagnosticSink for RecordingSink {
    fn error(&mut self, message: &str) {
        self.record(Severity::Error, message);
    }

    fn warning(&mut self, message: &str) {
        self.record(Severity::Warning, message);
    }

    fn info(&mut self, message: &str) {
        self.record(Severity::Info, message);
    }
}
