use thiserror::Error;

/// Precondition failures.
///
/// These signal a mistake in how the caller built its descriptor table or
/// configuration. Problems found in the user's tokens are never reported
/// through this type; they go to the diagnostic sink instead.
#[derive(Error, Debug)]
pub enum ArgsError {
    #[error("Invalid argument descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("Duplicate argument descriptor: {0}")]
    DuplicateDescriptor(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ArgsError>;
