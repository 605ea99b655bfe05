//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when talking to the GitHub API,
//! either through octocrab or through the direct HTTP calls used for file creation.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.get_file("my-org", "my-repo", "LICENSE.md").await {
///     Ok(()) => println!("present"),
///     Err(Error::NotFound) => println!("absent"),
///     Err(err) => eprintln!("could not check: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// GitHub rejected the request.
    ///
    /// Carries the HTTP status and the message from GitHub's error body, e.g.
    /// a 422 "Validation Failed" when a hook already exists.
    #[error("GitHub API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Authentication or GitHub client initialization failure.
    ///
    /// The contained string provides specific details about the failure.
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The repository metadata did not carry a usable contents URL template.
    #[error("Repository has no usable contents URL: {0}")]
    InvalidContentsUrl(String),

    /// The GitHub API returned an error or a response in an unexpected format.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// This error occurs when a GitHub API request returns a 404 status code,
    /// indicating that the requested resource (repository, file, hook list)
    /// does not exist or is not accessible with the current authentication.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The HTTP request could not be sent or the response could not be read.
    #[error("HTTP transport failure: {0}")]
    Transport(String),
}

impl Error {
    /// Returns true if this error means the resource is definitely absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}
