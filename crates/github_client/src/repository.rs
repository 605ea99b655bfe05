//! Repository domain types.
//!
//! This module contains the repository metadata needed to audit an organization:
//! the repository name, its owner and the contents URL template used to
//! create files directly over HTTP.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// The placeholder GitHub uses for the file path in repository URL templates.
const PATH_PLACEHOLDER: &str = "{+path}";

/// Owner information embedded in a repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    /// The login name of the user or organization owning the repository
    pub login: String,
}

/// Represents a GitHub repository as returned by the organization listing.
///
/// # Examples
///
/// ```rust
/// use github_client::Repository;
///
/// let repo_json = r#"{
///     "name": "ubersicht",
///     "full_name": "AmpersandJS/ubersicht",
///     "owner": { "login": "AmpersandJS" },
///     "contents_url": "https://api.github.com/repos/AmpersandJS/ubersicht/contents/{+path}"
/// }"#;
///
/// let repo: Repository = serde_json::from_str(repo_json).unwrap();
/// assert_eq!(repo.name, "ubersicht");
/// assert_eq!(
///     repo.contents_url_for("LICENSE.md").unwrap(),
///     "https://api.github.com/repos/AmpersandJS/ubersicht/contents/LICENSE.md"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// The name of the repository
    pub name: String,

    /// The full name of the repository (owner/name)
    pub full_name: String,

    /// The owner of the repository
    pub owner: RepositoryOwner,

    /// URL template for the contents API, e.g. `.../contents/{+path}`
    #[serde(default)]
    pub contents_url: Option<String>,
}

impl Repository {
    /// Returns the login of the repository owner.
    pub fn owner_login(&self) -> &str {
        &self.owner.login
    }

    /// Expands the contents URL template for the given path.
    ///
    /// Returns `None` if the repository has no contents URL or the template
    /// does not contain the `{+path}` placeholder. Leading slashes on the path
    /// are stripped.
    pub fn contents_url_for(&self, path: &str) -> Option<String> {
        let template = self.contents_url.as_deref()?;
        if !template.contains(PATH_PLACEHOLDER) {
            return None;
        }

        Some(template.replace(PATH_PLACEHOLDER, path.trim_start_matches('/')))
    }
}
