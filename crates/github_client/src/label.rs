//! Label domain types.
//!
//! This module contains types representing GitHub issue and pull request labels.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

/// Represents a label defined on a repository.
///
/// # Examples
///
/// ```
/// use github_client::Label;
///
/// let label = Label {
///     name: "bug".to_string(),
///     color: "d73a4a".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// The name of the label
    pub name: String,

    /// Colour hex string without the `#` prefix
    #[serde(default)]
    pub color: String,
}

/// Payload for `POST /repos/{owner}/{repo}/labels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCreatePayload {
    pub name: String,

    /// Colour hex string without the `#` prefix
    pub color: String,
}
