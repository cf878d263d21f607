//! Analysis properties supplied as `/d:key=value` arguments.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::command_line::Instance;
use crate::diagnostics::DiagnosticSink;

use super::ANALYSIS_PROPERTY;

pub const PROJECT_KEY: &str = "sonar.projectKey";
pub const PROJECT_NAME: &str = "sonar.projectName";
pub const PROJECT_VERSION: &str = "sonar.projectVersion";
pub const WORKING_DIRECTORY: &str = "sonar.working.directory";

static KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w[\w\d\.-]*$").expect("valid regex"));

/// A single `key=value` analysis property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    pub key: String,
    pub value: String,
}

impl Property {
    /// Splits `input` at the first `=`.
    ///
    /// Returns `None` if there is no `=` or the key is not a valid property key.
    /// The value may be empty and may itself contain `=`.
    pub fn parse(input: &str) -> Option<Self> {
        let (key, value) = input.split_once('=')?;
        if !KEY_REGEX.is_match(key) {
            return None;
        }

        Some(Self {
            key: key.to_string(),
            value: value.to_string(),
        })
    }

    /// Finds a property by key. Keys are compared ordinally.
    pub fn find<'p>(key: &str, properties: &'p [Property]) -> Option<&'p Property> {
        properties.iter().find(|p| p.key == key)
    }
}

/// Collects the `/d:` properties from `instances`.
///
/// Malformed and duplicate properties are reported, as are properties that
/// must be set through a dedicated argument or cannot be set at all. Returns
/// `None` if anything was reported.
pub fn extract_properties(
    instances: &[Instance<'_>],
    sink: &mut dyn DiagnosticSink,
) -> Option<Vec<Property>> {
    let mut valid = true;
    let mut properties: Vec<Property> = Vec::new();

    for raw in ANALYSIS_PROPERTY.values(instances) {
        match Property::parse(raw) {
            Some(property) => {
                if let Some(existing) = Property::find(&property.key, &properties) {
                    sink.error(&format!(
                        "A value has already been supplied for this property. Key: {}, existing value: {}",
                        raw, existing.value
                    ));
                    valid = false;
                } else {
                    properties.push(property);
                }
            }
            None => {
                sink.error(&format!(
                    "The format of the analysis property {} is invalid",
                    raw
                ));
                valid = false;
            }
        }
    }

    for (key, argument) in [
        (PROJECT_KEY, "/k:"),
        (PROJECT_NAME, "/n:"),
        (PROJECT_VERSION, "/v:"),
    ] {
        if Property::find(key, &properties).is_some() {
            sink.error(&format!(
                "Please use the parameter prefix '{}' to define '{}' instead of an analysis property",
                argument, key
            ));
            valid = false;
        }
    }

    if Property::find(WORKING_DIRECTORY, &properties).is_some() {
        sink.error(&format!(
            "The property '{}' is set automatically and cannot be supplied on the command line",
            WORKING_DIRECTORY
        ));
        valid = false;
    }

    valid.then_some(properties)
}
