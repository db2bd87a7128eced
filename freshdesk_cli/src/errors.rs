use std::fmt;

/// Failures that end the process. Details are shown to the user before these are returned.
#[derive(Debug, PartialEq)]
pub enum CliError {
    ConfigError,
    RuntimeError,
    ServeError,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError => write!(f, "Invalid configuration"),
            CliError::RuntimeError => write!(f, "Failed to start runtime"),
            CliError::ServeError => write!(f, "Server stopped with an error"),
        }
    }
}

impl std::error::Error for CliError {}
