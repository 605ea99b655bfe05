//! Generic webhook requirement.

use serde::{Deserialize, Deserializer};

use super::default_events;

#[cfg(test)]
#[path = "webhook_tests.rs"]
mod tests;

/// A generic webhook every repository of the organization must carry.
///
/// The identity of a hook is its target URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HookSpec {
    /// Webhook URL
    pub url: String,

    /// Events that trigger the webhook
    #[serde(default = "default_events")]
    pub events: Vec<String>,

    /// Content type (json or form)
    #[serde(default)]
    pub content_type: Option<String>,

    /// GitHub's certificate verification flag, `"0"` or `"1"`
    #[serde(default, deserialize_with = "deserialize_insecure_ssl")]
    pub insecure_ssl: Option<String>,

    /// Secret for webhook validation
    #[serde(default)]
    pub secret: Option<String>,

    /// Whether the webhook is created active
    #[serde(default = "default_active")]
    pub active: bool,

    /// Repositories that are not required to carry this hook
    #[serde(default)]
    pub exclude_repos: Vec<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SslFlag {
    Text(String),
    Number(u64),
    Flag(bool),
}

/// Accepts `"0"`/`"1"`, `0`/`1` or a boolean and keeps GitHub's string form.
fn deserialize_insecure_ssl<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = Option::<SslFlag>::deserialize(deserializer)?;
    Ok(flag.map(|f| match f {
        SslFlag::Text(s) => s,
        SslFlag::Number(n) => n.to_string(),
        SslFlag::Flag(true) => "1".to_string(),
        SslFlag::Flag(false) => "0".to_string(),
    }))
}
