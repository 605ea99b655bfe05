//! Per-item repository exclusions.

use config_manager::{FileSpec, HookSpec, LabelSpec, ServiceSpec};

#[cfg(test)]
#[path = "exclusion_tests.rs"]
mod tests;

/// A desired item that some repositories are not required to carry.
pub trait Excludable {
    /// Names of the repositories exempt from this item.
    fn exclude_repos(&self) -> &[String];

    /// Returns true if `repo` is exempt from this item.
    ///
    /// Repository names are compared exactly.
    fn is_excluded_for(&self, repo: &str) -> bool {
        self.exclude_repos().iter().any(|r| r == repo)
    }
}

impl Excludable for HookSpec {
    fn exclude_repos(&self) -> &[String] {
        &self.exclude_repos
    }
}

impl Excludable for ServiceSpec {
    fn exclude_repos(&self) -> &[String] {
        &self.exclude_repos
    }
}

impl Excludable for LabelSpec {
    fn exclude_repos(&self) -> &[String] {
        &self.exclude_repos
    }
}

impl Excludable for FileSpec {
    fn exclude_repos(&self) -> &[String] {
        &self.exclude_repos
    }
}
