//! Descriptor-driven command line argument matching.
//!
//! The [`command_line`] module holds the engine: an ordered table of
//! [`Descriptor`]s is matched against raw tokens, producing [`Instance`]s or a
//! set of diagnostics. The [`processor`] module builds the argument tables of
//! the analysis bootstrapper and pre-processor on top of it.

pub mod cli;
pub mod command_line;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;

pub use command_line::{CommandLineParser, Descriptor, Instance, ParseOutcome};
pub use diagnostics::{DiagnosticSink, LogSink, RecordingSink, Severity};
pub use error::{ArgsError, Result};
