//! Wire payloads for hook creation.

use config_manager::{HookSpec, ServiceSpec};
use github_client::{HookCreatePayload, ServiceHookConfig, WebHookConfig};

#[cfg(test)]
#[path = "hook_payload_tests.rs"]
mod tests;

/// Content type used when a hook does not set one.
pub const DEFAULT_CONTENT_TYPE: &str = "json";

/// Certificate verification flag used when a hook does not set one.
pub const DEFAULT_INSECURE_SSL: &str = "0";

/// Copies the configuration fields of a hook requirement as given.
pub fn hook_config(spec: &HookSpec) -> WebHookConfig {
    WebHookConfig {
        url: spec.url.clone(),
        content_type: spec.content_type.clone(),
        insecure_ssl: spec.insecure_ssl.clone(),
        secret: spec.secret.clone(),
    }
}

/// Fills in `content_type` and `insecure_ssl` when they are absent.
///
/// Present values, including `secret`, are kept unchanged, so normalizing a
/// normalized config is a no-op.
pub fn normalize_hook_config(config: &WebHookConfig) -> WebHookConfig {
    WebHookConfig {
        url: config.url.clone(),
        content_type: Some(
            config
                .content_type
                .clone()
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
        ),
        insecure_ssl: Some(
            config
                .insecure_ssl
                .clone()
                .unwrap_or_else(|| DEFAULT_INSECURE_SSL.to_string()),
        ),
        secret: config.secret.clone(),
    }
}

/// Builds the creation payload for a missing generic webhook.
pub fn web_hook_payload(spec: &HookSpec) -> HookCreatePayload {
    HookCreatePayload::web(
        normalize_hook_config(&hook_config(spec)),
        spec.events.clone(),
        spec.active,
    )
}

/// Builds the creation payload for a missing service hook.
pub fn service_hook_payload(spec: &ServiceSpec) -> HookCreatePayload {
    HookCreatePayload::service(
        &spec.name,
        ServiceHookConfig {
            token: spec.token.clone(),
            user: spec.user.clone(),
            domain: spec.domain.clone(),
        },
        spec.events.clone(),
    )
}
