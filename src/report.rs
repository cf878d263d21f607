//! Runs the selected argument table over the configured tokens.

use serde::Serialize;

use crate::cli::Mode;
use crate::command_line::{CommandLineParser, Descriptor, Instance};
use crate::config::Config;
use crate::diagnostics::{Diagnostic, RecordingSink};
use crate::error::ArgsError;
use crate::processor::{
    BootstrapperArgs, ProcessedArgs, bootstrapper, preprocessor, process_bootstrapper_args,
    process_preprocessor_args,
};

/// One recognized token, detached from the descriptor table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecognizedArgument {
    /// The first prefix (or the verb) of the matching descriptor.
    pub argument: String,
    pub value: String,
}

impl From<&Instance<'_>> for RecognizedArgument {
    fn from(instance: &Instance<'_>) -> Self {
        Self {
            argument: instance.descriptor().id().to_string(),
            value: instance.value().to_string(),
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Serialize)]
pub struct Report {
    pub mode: Mode,
    pub success: bool,
    pub instances: Vec<RecognizedArgument>,
    #[serde(flatten)]
    pub bootstrapper: Option<BootstrapperArgs>,
    #[serde(flatten)]
    pub pre_processor: Option<ProcessedArgs>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Report {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            success: false,
            instances: Vec::new(),
            bootstrapper: None,
            pre_processor: None,
            diagnostics: Vec::new(),
        }
    }
}

/// Processes `config.tokens` with the table selected by `config.mode`.
///
/// Problems with the tokens end up in [`Report::diagnostics`]; an `Err` means
/// the table itself could not be built.
pub fn run(config: &Config) -> Result<Report, ArgsError> {
    let mut sink = RecordingSink::new();
    let mut report = Report::new(config.mode);

    match config.mode {
        Mode::Bootstrapper => {
            let args = process_bootstrapper_args(&config.tokens, &mut sink)?;
            if let Some(args) = &args {
                report.instances = recognized(&args.instances);
            }
            report.success = args.is_some();
            report.bootstrapper = args;
        }
        Mode::PreProcessor => {
            let args = process_preprocessor_args(&config.tokens, &mut sink)?;
            if let Some(args) = &args {
                report.instances = recognized(&args.instances);
            }
            report.success = args.is_some();
            report.pre_processor = args;
        }
        Mode::Generic => {
            let descriptors = config.generic_descriptors()?;
            let table: Vec<&Descriptor> = descriptors.iter().collect();
            let parser = CommandLineParser::new(&table, config.allow_unrecognized)?;

            let outcome = parser.parse(&config.tokens, &mut sink);
            report.success = outcome.success;
            report.instances = recognized(&outcome.instances);
        }
    }

    log::debug!(
        "Processed {} token(s) in {:?} mode, success: {}",
        config.tokens.len(),
        config.mode,
        report.success
    );

    report.diagnostics = sink.into_diagnostics();
    Ok(report)
}

fn recognized(instances: &[Instance<'_>]) -> Vec<RecognizedArgument> {
    instances.iter().map(RecognizedArgument::from).collect()
}

/// Help lines for the table of `mode`, in matching order.
pub fn usage_lines(mode: Mode) -> Vec<String> {
    match mode {
        Mode::Bootstrapper => bootstrapper::descriptors().iter().map(|d| d.usage()).collect(),
        Mode::PreProcessor => preprocessor::descriptors().iter().map(|d| d.usage()).collect(),
        Mode::Generic => Vec::new(),
    }
}
