//! Pre-processor argument processing.
//!
//! Unlike the bootstrapper, the pre-processor knows every argument it can be
//! given, so unrecognized tokens are errors here.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::command_line::{CommandLineParser, Descriptor, Instance};
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;

use super::{ANALYSIS_PROPERTY, Property, SETTINGS_FILE, extract_properties};

/// Allowed characters are alphanumeric, '-', '_', '.' and ':', with at least
/// one non-digit.
static PROJECT_KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9:\-_\.]*[a-zA-Z:\-_\.]+[a-zA-Z0-9:\-_\.]*$").expect("valid regex")
});

/// Used when `/install:` is not supplied.
pub const DEFAULT_INSTALL_TARGETS: bool = true;

pub static PROJECT_KEY: LazyLock<Descriptor> = LazyLock::new(|| {
    Descriptor::prefixed(["/key:", "/k:"], "Project key")
        .expect("valid descriptor")
        .required()
});

pub static PROJECT_NAME: LazyLock<Descriptor> = LazyLock::new(|| {
    Descriptor::prefixed(["/name:", "/n:"], "Project name").expect("valid descriptor")
});

pub static PROJECT_VERSION: LazyLock<Descriptor> = LazyLock::new(|| {
    Descriptor::prefixed(["/version:", "/v:"], "Project version").expect("valid descriptor")
});

pub static ORGANIZATION: LazyLock<Descriptor> = LazyLock::new(|| {
    Descriptor::prefixed(["/organization:", "/o:"], "Organization key")
        .expect("valid descriptor")
});

pub static INSTALL_TARGETS: LazyLock<Descriptor> = LazyLock::new(|| {
    Descriptor::prefixed(["/install:"], "Whether to install the build targets (true|false)")
        .expect("valid descriptor")
});

/// The pre-processor table, in matching order.
pub fn descriptors() -> [&'static Descriptor; 7] {
    [
        &*PROJECT_KEY,
        &*PROJECT_NAME,
        &*PROJECT_VERSION,
        &*ORGANIZATION,
        &*INSTALL_TARGETS,
        &*SETTINGS_FILE,
        &*ANALYSIS_PROPERTY,
    ]
}

/// Validated pre-processor arguments.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedArgs {
    pub project_key: String,
    pub project_name: Option<String>,
    pub project_version: Option<String>,
    pub organization: Option<String>,
    pub install_targets: bool,
    pub settings_file: Option<String>,
    pub properties: Vec<Property>,
    /// Every recognized token, in input order.
    #[serde(skip)]
    pub instances: Vec<Instance<'static>>,
}

/// Processes the pre-processor command line.
///
/// Returns `Ok(None)` if any problem was reported to `sink`.
pub fn process_preprocessor_args<S: AsRef<str>>(
    tokens: &[S],
    sink: &mut dyn DiagnosticSink,
) -> Result<Option<ProcessedArgs>> {
    let parser = CommandLineParser::new(&descriptors(), false)?;
    let outcome = parser.parse(tokens, sink);
    let instances = &outcome.instances;

    let install_targets = parse_install_targets(instances, sink);
    let properties = extract_properties(instances, sink);

    let (true, Some(install_targets), Some(properties)) =
        (outcome.success, install_targets, properties)
    else {
        return Ok(None);
    };

    let value_of =
        |descriptor: &Descriptor| descriptor.find_value(instances).map(str::to_string);

    let Some(project_key) = value_of(&*PROJECT_KEY) else {
        // The parser enforces the required key; nothing left to report.
        return Ok(None);
    };

    if !is_valid_project_key(&project_key) {
        sink.error(&format!(
            "Invalid project key '{}'. Allowed characters are alphanumeric, '-', '_', '.' and ':', with at least one non-digit.",
            project_key
        ));
        return Ok(None);
    }

    Ok(Some(ProcessedArgs {
        project_key,
        project_name: value_of(&*PROJECT_NAME),
        project_version: value_of(&*PROJECT_VERSION),
        organization: value_of(&*ORGANIZATION),
        install_targets,
        settings_file: value_of(&*SETTINGS_FILE),
        properties,
        instances: outcome.instances.clone(),
    }))
}

pub fn is_valid_project_key(key: &str) -> bool {
    PROJECT_KEY_REGEX.is_match(key)
}

/// Reads `/install:`, which accepts `true` or `false` in any letter case,
/// ignoring surrounding whitespace.
fn parse_install_targets(
    instances: &[Instance<'_>],
    sink: &mut dyn DiagnosticSink,
) -> Option<bool> {
    let Some(value) = INSTALL_TARGETS.find_value(instances) else {
        return Some(DEFAULT_INSTALL_TARGETS);
    };

    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Some(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        sink.error(&format!(
            "Invalid value for /install: {}. Valid values are 'true' or 'false'.",
            value
        ));
        None
    }
}
