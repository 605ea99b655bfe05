//! Loading of the JSON configuration file.
//!
//! # Example configuration
//!
//! ```json
//! {
//!     "auth_token": "github_auth_token",
//!     "orgs": [ { "org": "AmpersandJS",
//!                 "exclude_repos": [ "ubersicht" ],
//!                 "hooks": [ { "url": "http://127.0.0.1:4242/github/callback",
//!                              "events": ["*"] } ],
//!                 "labels": [ { "name": "bug", "color": "fc2929" } ],
//!                 "files": [ "LICENSE.md" ] } ]
//! }
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::{validator::validate_config, ConfigurationError, ConfigurationResult, OrganizationSpec};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "./kantoku.cfg";

/// Environment variable that overrides `auth_token`.
pub const AUTH_TOKEN_ENV_VAR: &str = "KANTOKU_AUTH_TOKEN";

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration of an audit run.
///
/// Loaded once at start-up and never modified afterwards.
#[derive(Debug, Default, Deserialize)]
pub struct KantokuConfig {
    /// Personal access token used for every GitHub call
    #[serde(default, deserialize_with = "deserialize_token")]
    pub auth_token: Option<SecretString>,

    /// Organizations to audit, in order
    #[serde(default)]
    pub orgs: Vec<OrganizationSpec>,

    /// Base URL of the GitHub REST API, for GitHub Enterprise installs
    #[serde(default)]
    pub api_base_url: Option<String>,

    /// Connect and read timeout for each request
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Report file checks that failed for reasons other than not-found
    /// instead of treating the file as missing
    #[serde(default)]
    pub strict_file_checks: bool,
}

fn deserialize_token<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.map(SecretString::from))
}

impl KantokuConfig {
    /// Loads and validates the configuration file at `path`.
    ///
    /// The `KANTOKU_AUTH_TOKEN` environment variable, when set and not empty,
    /// replaces the token from the file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` if the file is missing or unreadable,
    /// is not valid JSON, lacks an auth token or fails validation.
    pub fn load(path: &Path) -> ConfigurationResult<Self> {
        let token_override = std::env::var(AUTH_TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.trim().is_empty());
        Self::load_with_token_override(path, token_override)
    }

    /// Loads the configuration file using an explicit token override.
    pub fn load_with_token_override(
        path: &Path,
        token_override: Option<String>,
    ) -> ConfigurationResult<Self> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(ConfigurationError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigurationError::FileAccessError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut config = Self::from_json_str(&content, &base_dir)?;
        if let Some(token) = token_override {
            debug!("Using auth token from {}", AUTH_TOKEN_ENV_VAR);
            config.auth_token = Some(SecretString::from(token));
        }

        validate_config(&config)?;

        info!(
            path = %path.display(),
            org_count = config.orgs.len(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Parses configuration JSON and reads file templates relative to `base_dir`.
    ///
    /// No validation is performed.
    pub fn from_json_str(content: &str, base_dir: &Path) -> ConfigurationResult<Self> {
        let mut config: KantokuConfig =
            serde_json::from_str(content).map_err(|e| ConfigurationError::ParseError {
                reason: e.to_string(),
            })?;

        config.load_file_templates(base_dir)?;
        Ok(config)
    }

    /// Returns true if a non-empty auth token is configured.
    pub fn has_auth_token(&self) -> bool {
        self.auth_token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().trim().is_empty())
    }

    /// Returns the request timeout, falling back to the default.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }

    fn load_file_templates(&mut self, base_dir: &Path) -> ConfigurationResult<()> {
        for org in &mut self.orgs {
            for file in &mut org.files {
                let Some(template) = &file.template else {
                    continue;
                };

                let template_path = base_dir.join(template);
                let content = fs::read_to_string(&template_path).map_err(|e| {
                    ConfigurationError::FileAccessError {
                        path: template_path.display().to_string(),
                        reason: e.to_string(),
                    }
                })?;
                file.content = Some(content);
            }
        }

        Ok(())
    }
}
