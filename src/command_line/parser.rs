//! The matching and validation engine.
//!
//! Tokens are matched one at a time against the descriptor table in the order
//! it was supplied; the first descriptor that accepts a token wins. There is no
//! longest-match preference, so a table with overlapping prefixes must list
//! the more specific entries first.
//!
//! After the scan, the provisional instances are checked for repeated
//! single-valued arguments and for missing mandatory ones. Every problem is
//! reported; the parse only succeeds if none was found.

use std::ptr;

use crate::diagnostics::DiagnosticSink;
use crate::error::{ArgsError, Result};

use super::{Descriptor, Instance};

/// Result of one [`CommandLineParser::parse`] call.
///
/// `instances` is empty whenever `success` is false.
#[derive(Debug)]
pub struct ParseOutcome<'a> {
    pub success: bool,
    pub instances: Vec<Instance<'a>>,
}

impl<'a> ParseOutcome<'a> {
    fn failed() -> Self {
        Self {
            success: false,
            instances: Vec::new(),
        }
    }
}

/// Parses raw tokens against an ordered, immutable descriptor table.
///
/// The parser holds no state between calls and may be shared across threads.
#[derive(Debug)]
pub struct CommandLineParser<'a> {
    descriptors: Vec<&'a Descriptor>,
    allow_unrecognized: bool,
}

impl<'a> CommandLineParser<'a> {
    /// Creates a parser over `descriptors`, keeping their order.
    ///
    /// When `allow_unrecognized` is true, tokens no descriptor accepts are
    /// dropped silently; otherwise each one is reported as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::DuplicateDescriptor`] if the same descriptor
    /// appears more than once in the table. Distinct descriptors with identical
    /// prefixes are accepted.
    pub fn new(descriptors: &[&'a Descriptor], allow_unrecognized: bool) -> Result<Self> {
        for (index, descriptor) in descriptors.iter().enumerate() {
            if descriptors[..index].iter().any(|d| ptr::eq(*d, *descriptor)) {
                return Err(ArgsError::DuplicateDescriptor(format!(
                    "'{}' ({}) is listed more than once",
                    descriptor.id(),
                    descriptor.description()
                )));
            }
        }

        Ok(Self {
            descriptors: descriptors.to_vec(),
            allow_unrecognized,
        })
    }

    pub fn descriptors(&self) -> &[&'a Descriptor] {
        &self.descriptors
    }

    pub fn allows_unrecognized(&self) -> bool {
        self.allow_unrecognized
    }

    /// Recognizes `tokens` and validates the resulting instances.
    ///
    /// Messages reach `sink` in discovery order: unrecognized tokens first
    /// (in token order), then repeated arguments, then missing ones.
    pub fn parse<S: AsRef<str>>(
        &self,
        tokens: &[S],
        sink: &mut dyn DiagnosticSink,
    ) -> ParseOutcome<'a> {
        let mut errors = 0usize;
        // Each instance keeps the token it came from for duplicate messages.
        let mut provisional: Vec<(Instance<'a>, &str)> = Vec::new();

        for token in tokens {
            let token: &str = token.as_ref();
            match self.recognize(token) {
                Some(instance) => provisional.push((instance, token)),
                None if self.allow_unrecognized => {
                    log::debug!("Ignoring unrecognized argument: {}", token);
                }
                None => {
                    sink.error(&format!("Unrecognized command line argument: {}", token));
                    errors += 1;
                }
            }
        }

        errors += self.check_multiplicity(&provisional, sink);
        errors += self.check_required(&provisional, sink);

        if errors > 0 {
            log::debug!("Argument parsing failed with {} error(s)", errors);
            return ParseOutcome::failed();
        }

        ParseOutcome {
            success: true,
            instances: provisional.into_iter().map(|(instance, _)| instance).collect(),
        }
    }

    /// Finds the first descriptor, in table order, that accepts `token`.
    fn recognize(&self, token: &str) -> Option<Instance<'a>> {
        self.descriptors.iter().find_map(|descriptor| {
            descriptor.match_token(token).map(|value| {
                log::debug!("Recognized '{}' as {}", token, descriptor.id());
                Instance::new(*descriptor, value)
            })
        })
    }

    fn check_multiplicity(
        &self,
        provisional: &[(Instance<'a>, &str)],
        sink: &mut dyn DiagnosticSink,
    ) -> usize {
        let mut errors = 0;

        for descriptor in self.descriptors.iter().filter(|d| !d.allows_multiple()) {
            let mut matching = provisional
                .iter()
                .filter(|(instance, _)| descriptor.matches(instance));

            let Some((first, _)) = matching.next() else {
                continue;
            };

            for (_, token) in matching {
                sink.error(&format!(
                    "A value has already been supplied for this argument: {}. Existing: '{}'",
                    token,
                    first.value()
                ));
                errors += 1;
            }
        }

        errors
    }

    fn check_required(
        &self,
        provisional: &[(Instance<'a>, &str)],
        sink: &mut dyn DiagnosticSink,
    ) -> usize {
        let mut errors = 0;

        for descriptor in self.descriptors.iter().filter(|d| d.is_required()) {
            let present = provisional
                .iter()
                .any(|(instance, _)| descriptor.matches(instance));

            if !present {
                sink.error(&format!(
                    "A required argument is missing: {}",
                    descriptor.description()
                ));
                errors += 1;
            }
        }

        errors
    }
}
