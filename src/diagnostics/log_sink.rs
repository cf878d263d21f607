use colored::Colorize;

use super::DiagnosticSink;

/// Sink that forwards every message to the `log` facade.
///
/// Errors are additionally highlighted unless colors were disabled through
/// `colored::control::set_override(false)`.
#[derive(Debug, Default)]
pub struct LogSink {
    errors: usize,
    warnings: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn warning_count(&self) -> usize {
        self.warnings
    }
}

impl DiagnosticSink for LogSink {
    fn error(&mut self, message: &str) {
        self.errors += 1;
        log::error!("{}", message.red());
    }

    fn warning(&mut self, message: &str) {
        self.warnings += 1;
        log::warn!("{}", message.yellow());
    }

    fn info(&mut self, message: &str) {
        log::info!("{}", message);
    }
}
