//! Configuration management for kantoku.
//!
//! This crate defines the typed schema of the JSON configuration file and
//! loads, resolves and validates it. Every optional collection defaults to
//! empty, so a sparse configuration file parses without error.

pub mod config;
pub mod errors;
pub mod organization;
pub mod settings;
pub mod validator;

// Re-export for convenient access
pub use config::{
    KantokuConfig, AUTH_TOKEN_ENV_VAR, DEFAULT_CONFIG_PATH, DEFAULT_REQUEST_TIMEOUT_SECS,
};
pub use errors::{ConfigurationError, ConfigurationResult};
pub use organization::OrganizationSpec;
pub use settings::{FileSpec, HookSpec, LabelSpec, ServiceSpec};
pub use validator::{validate_config, ValidationError};
