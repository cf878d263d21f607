//! Plain text output formatter.
//!
//! Prints one `label: value` line per extracted setting, in a fixed order.
//! Failed runs produce no output; their diagnostics go to the log.

use super::formatter::OutputFormatter;
use crate::report::Report;

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format(&self, report: &Report) -> String {
        if !report.success {
            return String::new();
        }

        let mut lines: Vec<String> = report
            .instances
            .iter()
            .map(|i| format!("{}\t{}", i.argument, i.value))
            .collect();

        if let Some(args) = &report.bootstrapper {
            lines.push(format!("phase: {}", args.phase.as_str()));
            if let Some(path) = &args.settings_file {
                lines.push(format!("settings file: {}", path));
            }
            for property in &args.properties {
                lines.push(format!("property: {}={}", property.key, property.value));
            }
            for arg in &args.child_args {
                lines.push(format!("child argument: {}", arg));
            }
        }

        if let Some(args) = &report.pre_processor {
            lines.push(format!("project key: {}", args.project_key));
            for (label, value) in [
                ("project name", &args.project_name),
                ("project version", &args.project_version),
                ("organization", &args.organization),
                ("settings file", &args.settings_file),
            ] {
                if let Some(value) = value {
                    lines.push(format!("{}: {}", label, value));
                }
            }
            lines.push(format!("install targets: {}", args.install_targets));
            for property in &args.properties {
                lines.push(format!("property: {}={}", property.key, property.value));
            }
        }

        lines.join("\n")
    }

    fn logs_diagnostics(&self) -> bool {
        true
    }
}
