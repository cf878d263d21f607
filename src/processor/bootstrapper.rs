//! Bootstrapper argument processing.
//!
//! The bootstrapper decides which analysis phase to run (`begin` or `end`) and
//! forwards everything else to that phase untouched, so unrecognized tokens are
//! allowed here.

use std::sync::LazyLock;

use serde::Serialize;

use crate::command_line::{CommandLineParser, Descriptor, Instance};
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;

use super::{ANALYSIS_PROPERTY, Property, SETTINGS_FILE, extract_properties};

pub static BEGIN: LazyLock<Descriptor> = LazyLock::new(|| {
    Descriptor::verb("begin", "Performs the pre-processing steps before the build")
        .expect("valid descriptor")
});

pub static END: LazyLock<Descriptor> = LazyLock::new(|| {
    Descriptor::verb("end", "Performs the analysis steps after the build")
        .expect("valid descriptor")
});

/// The bootstrapper table, in matching order.
pub fn descriptors() -> [&'static Descriptor; 4] {
    [&*BEGIN, &*END, &*SETTINGS_FILE, &*ANALYSIS_PROPERTY]
}

/// Which analysis stage an invocation asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisPhase {
    PreProcessing,
    PostProcessing,
}

impl AnalysisPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisPhase::PreProcessing => "pre-processing",
            AnalysisPhase::PostProcessing => "post-processing",
        }
    }
}

/// Arguments accepted by the bootstrapper.
#[derive(Debug, Clone, Serialize)]
pub struct BootstrapperArgs {
    pub phase: AnalysisPhase,
    /// The original tokens minus the phase verbs, for the selected phase.
    pub child_args: Vec<String>,
    pub settings_file: Option<String>,
    pub properties: Vec<Property>,
    /// Every recognized token, in input order.
    #[serde(skip)]
    pub instances: Vec<Instance<'static>>,
}

/// Returns true if the user asked for help with `/h` or `/?`.
pub fn is_help<S: AsRef<str>>(tokens: &[S]) -> bool {
    tokens.iter().any(|t| {
        let t: &str = t.as_ref();
        t == "/h" || t == "/?"
    })
}

/// Processes the bootstrapper command line.
///
/// Returns `Ok(None)` if any problem was reported to `sink`.
pub fn process_bootstrapper_args<S: AsRef<str>>(
    tokens: &[S],
    sink: &mut dyn DiagnosticSink,
) -> Result<Option<BootstrapperArgs>> {
    let parser = CommandLineParser::new(&descriptors(), true)?;
    let outcome = parser.parse(tokens, sink);

    let properties = extract_properties(&outcome.instances, sink);
    let phase = select_phase(tokens.len(), &outcome.instances, sink);

    let (Some(properties), Some(phase), true) = (properties, phase, outcome.success) else {
        return Ok(None);
    };

    log::debug!("Selected analysis phase: {:?}", phase);

    let settings_file = SETTINGS_FILE
        .find_value(&outcome.instances)
        .map(str::to_string);

    Ok(Some(BootstrapperArgs {
        phase,
        child_args: strip_phase_verbs(tokens),
        settings_file,
        properties,
        instances: outcome.instances,
    }))
}

/// Picks the phase from the `begin`/`end` verbs.
///
/// Invocations without either verb predate the verbs: they run the
/// post-processing phase when called with no arguments at all, and the
/// pre-processing phase otherwise.
fn select_phase(
    token_count: usize,
    instances: &[Instance<'_>],
    sink: &mut dyn DiagnosticSink,
) -> Option<AnalysisPhase> {
    match (BEGIN.exists(instances), END.exists(instances)) {
        (true, true) => {
            sink.error("Invalid command line parameters. Please specify either 'begin' or 'end', not both.");
            None
        }
        (false, false) => {
            sink.warning(
                "Neither 'begin' nor 'end' was specified. The phase is inferred from the number of arguments; \
                 this behavior is deprecated and 'begin' or 'end' should be used instead.",
            );
            if token_count == 0 {
                Some(AnalysisPhase::PostProcessing)
            } else {
                Some(AnalysisPhase::PreProcessing)
            }
        }
        (true, false) => Some(AnalysisPhase::PreProcessing),
        (false, true) => Some(AnalysisPhase::PostProcessing),
    }
}

/// Removes the phase verbs, which only mean something to the bootstrapper.
pub fn strip_phase_verbs<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let verbs: Vec<&'static str> = [&*BEGIN, &*END]
        .into_iter()
        .flat_map(|d: &'static Descriptor| d.prefixes())
        .map(String::as_str)
        .collect();

    tokens
        .iter()
        .filter_map(|t| {
            let t: &str = t.as_ref();
            (!verbs.contains(&t)).then(|| t.to_string())
        })
        .collect()
}
