use std::collections::HashSet;
use std::ptr;

use crate::error::{ArgsError, Result};

use super::Instance;

/// Declaration of one recognizable argument shape.
///
/// A descriptor is either a verb (matched only when a token equals its single
/// literal exactly) or a prefixed argument (matched when a token starts with
/// one of its prefixes; the rest of the token is the value).
///
/// Descriptors have identity: two descriptors built from the same values are
/// still different arguments. For that reason this type implements neither
/// `Clone` nor `PartialEq`; tables hold references to descriptors that are
/// built once and never mutated.
#[derive(Debug)]
pub struct Descriptor {
    prefixes: Vec<String>,
    required: bool,
    description: String,
    allow_multiple: bool,
    is_verb: bool,
}

impl Descriptor {
    /// Creates an optional, single-valued prefixed argument.
    ///
    /// Use [`Descriptor::required`] and [`Descriptor::allow_multiple`] to
    /// change the cardinality rules.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::InvalidDescriptor`] if `prefixes` is empty,
    /// contains an empty or repeated prefix, or if `description` is blank.
    pub fn prefixed<I, S>(prefixes: I, description: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(Into::into).collect();
        Self::build(prefixes, description.into(), false)
    }

    /// Creates a verb: a bare word such as `begin` that carries no value.
    ///
    /// Verbs are never required and never allowed more than once.
    pub fn verb(literal: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        Self::build(vec![literal.into()], description.into(), true)
    }

    /// Marks the argument as mandatory.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Allows the argument to be supplied any number of times.
    pub fn allow_multiple(mut self) -> Self {
        self.allow_multiple = true;
        self
    }

    fn build(prefixes: Vec<String>, description: String, is_verb: bool) -> Result<Self> {
        if prefixes.is_empty() {
            return Err(ArgsError::InvalidDescriptor(
                "at least one prefix must be supplied".to_string(),
            ));
        }

        if prefixes.iter().any(|p| p.is_empty()) {
            return Err(ArgsError::InvalidDescriptor(
                "prefixes must not be empty".to_string(),
            ));
        }

        let repeated = {
            let mut seen = HashSet::new();
            prefixes.iter().find(|p| !seen.insert(p.as_str())).cloned()
        };
        if let Some(repeated) = repeated {
            return Err(ArgsError::InvalidDescriptor(format!(
                "prefix '{}' is listed more than once",
                repeated
            )));
        }

        if description.trim().is_empty() {
            return Err(ArgsError::InvalidDescriptor(format!(
                "a description is required for '{}'",
                prefixes[0]
            )));
        }

        Ok(Self {
            prefixes,
            required: false,
            description,
            allow_multiple: false,
            is_verb,
        })
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// The first prefix, used to name the argument in messages and reports.
    pub fn id(&self) -> &str {
        &self.prefixes[0]
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn allows_multiple(&self) -> bool {
        self.allow_multiple
    }

    pub fn is_verb(&self) -> bool {
        self.is_verb
    }

    /// Tries to recognize `token`, returning the extracted value on success.
    ///
    /// Comparison is ordinal and case-sensitive. For prefixed arguments the
    /// prefixes are tried in declaration order and the value is the verbatim
    /// remainder of the token.
    pub(crate) fn match_token<'t>(&self, token: &'t str) -> Option<&'t str> {
        if self.is_verb {
            (token == self.prefixes[0]).then_some("")
        } else {
            self.prefixes
                .iter()
                .find_map(|prefix| token.strip_prefix(prefix.as_str()))
        }
    }

    /// Returns true if `instance` was produced by this descriptor.
    pub fn matches(&self, instance: &Instance<'_>) -> bool {
        ptr::eq(self, instance.descriptor())
    }

    /// Returns true if any of `instances` was produced by this descriptor.
    pub fn exists(&self, instances: &[Instance<'_>]) -> bool {
        instances.iter().any(|i| self.matches(i))
    }

    /// Value of the first instance (in list order) produced by this descriptor.
    pub fn find_value<'i>(&self, instances: &'i [Instance<'_>]) -> Option<&'i str> {
        instances
            .iter()
            .find(|i| self.matches(i))
            .map(|i| i.value())
    }

    /// Every value produced by this descriptor, in list order.
    pub fn values<'i>(&self, instances: &'i [Instance<'_>]) -> Vec<&'i str> {
        instances
            .iter()
            .filter(|i| self.matches(i))
            .map(|i| i.value())
            .collect()
    }

    /// One help line, e.g. `/key:|/k:  [required] SonarQube project key`.
    pub fn usage(&self) -> String {
        let mut line = self.prefixes.join("|");
        if !self.is_verb {
            line.push_str("<value>");
        }
        line.push_str("  ");
        if self.required {
            line.push_str("[required] ");
        }
        if self.allow_multiple {
            line.push_str("[multiple] ");
        }
        line.push_str(&self.description);
        line
    }
}
