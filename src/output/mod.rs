//! Output generation.
//!
//! Renders a run's report on stdout in the configured format and forwards
//! diagnostics to the log when the format does not carry them itself.

pub mod formatter;
pub mod json;
pub mod plain;

use std::io::{self, Write};

use colored::Colorize;
use thiserror::Error;

use crate::cli::{Mode, OutputFormat};
use crate::diagnostics::LogSink;
use crate::report::Report;
use formatter::create_formatter;

/// Errors that can occur during output generation.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes reports and usage text to stdout.
pub struct OutputWriter {
    format: OutputFormat,
    no_color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        Self { format, no_color }
    }

    /// Writes the report to stdout and its diagnostics to the log.
    pub fn write(&self, report: &Report) -> Result<(), OutputError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, report)
    }

    /// Writes the report to `out`.
    ///
    /// Successful plain reports get a header naming the mode.
    pub fn write_to(&self, out: &mut dyn Write, report: &Report) -> Result<(), OutputError> {
        let formatter = create_formatter(self.format);

        if formatter.logs_diagnostics() {
            let mut sink = LogSink::new();
            for diagnostic in &report.diagnostics {
                diagnostic.emit_to(&mut sink);
            }
            log_summary(&sink);
        }

        let formatted = formatter.format(report);

        if self.format == OutputFormat::Plain {
            if !report.success {
                return Ok(());
            }
            self.write_header(out, mode_name(report.mode))?;
        }

        if !formatted.is_empty() {
            writeln!(out, "{}", formatted)?;
        }

        Ok(())
    }

    /// Writes the help lines of a descriptor table.
    pub fn write_usage(
        &self,
        out: &mut dyn Write,
        mode: Mode,
        lines: &[String],
    ) -> Result<(), OutputError> {
        self.write_header(out, &format!("{} arguments", mode_name(mode)))?;
        for line in lines {
            writeln!(out, "  {}", line)?;
        }
        Ok(())
    }

    fn write_header(&self, out: &mut dyn Write, title: &str) -> Result<(), OutputError> {
        let header = format!("----------- {} -----------", title);
        if self.no_color {
            writeln!(out, "{}", header)?;
        } else {
            writeln!(out, "{}", header.cyan().bold())?;
        }
        Ok(())
    }
}

fn log_summary(sink: &LogSink) {
    match (sink.error_count(), sink.warning_count()) {
        (0, _) => {}
        (errors, warnings) => log::error!(
            "Argument processing failed with {} error(s) and {} warning(s)",
            errors,
            warnings
        ),
    }
}

fn mode_name(mode: Mode) -> &'static str {
    match mode {
        Mode::Bootstrapper => "bootstrapper",
        Mode::PreProcessor => "pre-processor",
        Mode::Generic => "generic",
    }
}
