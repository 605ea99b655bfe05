//! Per-organization desired state.

use serde::Deserialize;

use crate::settings::{FileSpec, HookSpec, LabelSpec, ServiceSpec};

#[cfg(test)]
#[path = "organization_tests.rs"]
mod tests;

/// Desired state for every repository of one GitHub organization.
///
/// Every list is optional in the configuration file and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OrganizationSpec {
    /// Organization login
    #[serde(default)]
    pub org: String,

    /// Repositories skipped entirely
    #[serde(default)]
    pub exclude_repos: Vec<String>,

    #[serde(default)]
    pub hooks: Vec<HookSpec>,

    #[serde(default)]
    pub services: Vec<ServiceSpec>,

    #[serde(default)]
    pub labels: Vec<LabelSpec>,

    #[serde(default)]
    pub files: Vec<FileSpec>,
}

impl OrganizationSpec {
    /// Returns true if the repository is skipped for this organization.
    pub fn is_repository_excluded(&self, repo: &str) -> bool {
        self.exclude_repos.iter().any(|r| r == repo)
    }
}
