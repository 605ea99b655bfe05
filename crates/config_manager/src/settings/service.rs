//! Legacy service hook requirement.

use serde::Deserialize;

use super::default_events;

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;

/// A third-party service hook every repository of the organization must carry.
///
/// Service names are compared without regard to case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceSpec {
    /// Service name, e.g. `campfire`
    pub name: String,

    /// Authentication token for the service
    #[serde(default)]
    pub token: Option<String>,

    /// Service account user
    #[serde(default)]
    pub user: Option<String>,

    /// Service domain
    #[serde(default)]
    pub domain: Option<String>,

    /// Events that trigger the service
    #[serde(default = "default_events")]
    pub events: Vec<String>,

    /// Repositories that are not required to carry this service
    #[serde(default)]
    pub exclude_repos: Vec<String>,
}

impl ServiceSpec {
    /// Returns the identity key of the service: its lower-cased name.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
