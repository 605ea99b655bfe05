//! GitHub repository hook types.
//!
//! GitHub reports two families of hooks on the same endpoint: generic webhooks,
//! whose name is `web`, and legacy service hooks, named after the third-party
//! integration. The family is decided once when a hook is deserialized.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;

/// The hook name GitHub uses for generic webhooks.
pub const GENERIC_HOOK_NAME: &str = "web";

/// The family a repository hook belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// A generic webhook (`name == "web"`)
    Generic,
    /// A legacy third-party service hook
    Service,
}

impl HookKind {
    /// Classifies a hook by its name, ignoring case.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case(GENERIC_HOOK_NAME) {
            Self::Generic
        } else {
            Self::Service
        }
    }
}

/// A hook registered on a repository.
///
/// # Examples
///
/// ```rust
/// use github_client::{HookKind, RepositoryHook};
///
/// let hook_json = r#"{
///     "id": 12345,
///     "name": "web",
///     "active": true,
///     "events": ["push", "pull_request"],
///     "config": {
///         "url": "https://example.com/webhook",
///         "content_type": "json",
///         "insecure_ssl": "0"
///     }
/// }"#;
///
/// let hook: RepositoryHook = serde_json::from_str(hook_json).unwrap();
/// assert_eq!(hook.id, 12345);
/// assert_eq!(hook.kind, HookKind::Generic);
/// assert_eq!(hook.url.as_deref(), Some("https://example.com/webhook"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "HookResponse")]
pub struct RepositoryHook {
    /// GitHub-assigned hook ID
    pub id: u64,

    /// Hook name as reported by GitHub (`web` or the service name)
    pub name: String,

    /// Family decided from the name
    pub kind: HookKind,

    /// Target URL from the hook configuration, if any
    pub url: Option<String>,

    /// Events that trigger the hook
    pub events: Vec<String>,

    /// Whether the hook is active
    pub active: bool,
}

#[derive(Deserialize)]
struct HookResponse {
    id: u64,
    name: String,
    #[serde(default)]
    config: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    events: Vec<String>,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

impl From<HookResponse> for RepositoryHook {
    fn from(value: HookResponse) -> Self {
        let url = value
            .config
            .get("url")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());

        Self {
            id: value.id,
            kind: HookKind::from_name(&value.name),
            name: value.name,
            url,
            events: value.events,
            active: value.active,
        }
    }
}

/// Wire configuration of a generic webhook.
///
/// `insecure_ssl` uses GitHub's string form: `"0"` verifies certificates,
/// `"1"` skips verification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebHookConfig {
    /// Target URL
    pub url: String,

    /// Payload content type (`json` or `form`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Certificate verification flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insecure_ssl: Option<String>,

    /// Shared secret used to sign deliveries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

/// Wire configuration of a legacy service hook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceHookConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Configuration block of a hook creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HookConfigPayload {
    Web(WebHookConfig),
    Service(ServiceHookConfig),
}

/// Payload for `POST /repos/{owner}/{repo}/hooks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookCreatePayload {
    /// `web` for generic webhooks, the service name otherwise
    pub name: String,

    pub config: HookConfigPayload,

    pub events: Vec<String>,

    pub active: bool,
}

impl HookCreatePayload {
    /// Builds the payload for a generic webhook.
    pub fn web(config: WebHookConfig, events: Vec<String>, active: bool) -> Self {
        Self {
            name: GENERIC_HOOK_NAME.to_string(),
            config: HookConfigPayload::Web(config),
            events,
            active,
        }
    }

    /// Builds the payload for a service hook.
    pub fn service(name: &str, config: ServiceHookConfig, events: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            config: HookConfigPayload::Service(config),
            events,
            active: true,
        }
    }
}
