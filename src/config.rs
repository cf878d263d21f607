use crate::cli::{Cli, Mode, OutputFormat};
use crate::command_line::Descriptor;
use crate::error::ArgsError;

#[derive(Debug)]
pub struct Config {
    pub no_color: bool,
    pub verbose: bool,
    pub format: OutputFormat,
    pub mode: Mode,
    pub prefixes: Vec<String>,
    pub verbs: Vec<String>,
    pub allow_unrecognized: bool,
    pub allow_multiple: bool,
    pub tokens: Vec<String>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ArgsError> {
        let has_table = !cli.prefixes.is_empty() || !cli.verbs.is_empty();
        let has_generic_flags = cli.allow_unrecognized || cli.allow_multiple;

        match cli.mode {
            Mode::Generic if !has_table => {
                return Err(ArgsError::Config(
                    "Generic mode requires at least one --prefix or --verb".to_string(),
                ));
            }
            Mode::Bootstrapper | Mode::PreProcessor if has_table || has_generic_flags => {
                return Err(ArgsError::Config(
                    "--prefix, --verb, --allow-unrecognized and --allow-multiple \
                     are only valid in generic mode"
                        .to_string(),
                ));
            }
            _ => {}
        }

        Ok(Self {
            no_color: cli.no_color,
            verbose: cli.verbose,
            format: cli.format,
            mode: cli.mode,
            prefixes: cli.prefixes,
            verbs: cli.verbs,
            allow_unrecognized: cli.allow_unrecognized,
            allow_multiple: cli.allow_multiple,
            tokens: cli.tokens,
        })
    }

    /// Builds the generic-mode table: prefixes in the order given, then verbs.
    pub fn generic_descriptors(&self) -> Result<Vec<Descriptor>, ArgsError> {
        let mut descriptors = Vec::with_capacity(self.prefixes.len() + self.verbs.len());

        for prefix in &self.prefixes {
            let descriptor =
                Descriptor::prefixed([prefix.as_str()], format!("Argument '{}'", prefix))?;
            descriptors.push(if self.allow_multiple {
                descriptor.allow_multiple()
            } else {
                descriptor
            });
        }

        for verb in &self.verbs {
            descriptors.push(Descriptor::verb(verb.as_str(), format!("Verb '{}'", verb))?);
        }

        Ok(descriptors)
    }
}
