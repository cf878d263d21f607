//! Argument processors for the analysis bootstrapper and pre-processor.
//!
//! Each processor owns a process-wide descriptor table, runs the
//! [`CommandLineParser`](crate::command_line::CommandLineParser) over the raw
//! tokens and then interprets the recognized instances. All processors keep
//! going after the first failure so that every problem is reported in one run.

pub mod bootstrapper;
pub mod preprocessor;
pub mod properties;

pub use bootstrapper::{AnalysisPhase, BootstrapperArgs, process_bootstrapper_args};
pub use preprocessor::{ProcessedArgs, process_preprocessor_args};
pub use properties::{Property, extract_properties};

use std::sync::LazyLock;

use crate::command_line::Descriptor;

/// `/s:<path>`: analysis settings file.
pub static SETTINGS_FILE: LazyLock<Descriptor> = LazyLock::new(|| {
    Descriptor::prefixed(["/s:"], "Path to the analysis settings file")
        .expect("valid descriptor")
});

/// `/d:<key>=<value>`: analysis property, may be repeated.
pub static ANALYSIS_PROPERTY: LazyLock<Descriptor> = LazyLock::new(|| {
    Descriptor::prefixed(["/d:"], "Analysis property in the form key=value")
        .expect("valid descriptor")
        .allow_multiple()
});
