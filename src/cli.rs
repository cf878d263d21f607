use clap::Parser;
use serde::Serialize;

use crate::processor::bootstrapper;

/// Descriptor-driven command line argument matcher
///
/// Classifies raw tokens the way the analysis bootstrapper and pre-processor
/// do, and reports every recognized argument and every problem found.
///
/// Tokens follow the options, e.g. `argmatch --mode pre-processor /k:key /n:Name`.
/// Pass `/h` or `/?` as a token to list the arguments of the selected mode.
#[derive(Parser, Debug)]
#[command(name = "argmatch")]
#[command(version)]
#[command(about, long_about)]
#[command(after_long_help = bootstrapper_usage())]
pub struct Cli {
    /// Suppress colored output (useful for CI/CD pipelines)
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Output format: plain, json
    #[arg(short = 'f', long = "format", default_value = "plain")]
    pub format: OutputFormat,

    /// Argument table to match against: bootstrapper, pre-processor, generic
    #[arg(short = 'm', long = "mode", default_value = "bootstrapper")]
    pub mode: Mode,

    /// Generic mode: accept a prefixed argument (repeatable, matched in the order given)
    #[arg(short = 'p', long = "prefix")]
    pub prefixes: Vec<String>,

    /// Generic mode: accept a verb (repeatable, matched after all prefixes)
    #[arg(long = "verb")]
    pub verbs: Vec<String>,

    /// Generic mode: ignore tokens that match no argument
    #[arg(short = 'a', long = "allow-unrecognized")]
    pub allow_unrecognized: bool,

    /// Generic mode: allow each prefixed argument to be supplied more than once
    #[arg(short = 'M', long = "allow-multiple")]
    pub allow_multiple: bool,

    /// Raw tokens to classify
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Bootstrapper arguments, shown after the options in `--help`.
fn bootstrapper_usage() -> String {
    let mut text = String::from("Bootstrapper arguments:");
    for descriptor in bootstrapper::descriptors() {
        text.push_str("\n  ");
        text.push_str(&descriptor.usage());
    }
    text
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Bootstrapper,
    PreProcessor,
    Generic,
}
