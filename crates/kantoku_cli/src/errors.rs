use config_manager::ConfigurationError;
use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the kantoku CLI application.
///
/// Both variants are raised before the first API request; once the audit
/// has started, problems are reported as events instead.
#[derive(Error, Debug)]
pub enum Error {
    /// The GitHub client could not be initialized from the configured token.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The configuration file is missing, malformed or invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ConfigurationError> for Error {
    fn from(value: ConfigurationError) -> Self {
        Error::Config(value.to_string())
    }
}

impl From<github_client::Error> for Error {
    fn from(value: github_client::Error) -> Self {
        Error::Auth(value.to_string())
    }
}
