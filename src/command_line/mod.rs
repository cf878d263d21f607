//! Descriptor-driven command line recognition.
//!
//! A caller declares the arguments it understands as an ordered table of
//! [`Descriptor`]s, hands the table to a [`CommandLineParser`], and parses raw
//! tokens into [`Instance`]s. Problems with the tokens are reported through a
//! [`DiagnosticSink`](crate::diagnostics::DiagnosticSink); only mistakes in the
//! table itself are returned as errors.

pub mod descriptor;
pub mod instance;
pub mod parser;

pub use descriptor::Descriptor;
pub use instance::Instance;
pub use parser::{CommandLineParser, ParseOutcome};
