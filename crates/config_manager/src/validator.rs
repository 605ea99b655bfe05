//! Configuration validation.
//!
//! Validation collects every problem in one pass so a broken configuration
//! can be fixed in a single edit.

use std::collections::HashSet;

use crate::{ConfigurationError, ConfigurationResult, KantokuConfig, OrganizationSpec};

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;

/// Individual validation error with the path of the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Path of the field, e.g. `orgs[0].labels[2].color`
    pub field_path: String,

    /// Human readable description of the problem
    pub message: String,
}

impl ValidationError {
    pub fn new(field_path: &str, message: &str) -> Self {
        Self {
            field_path: field_path.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field_path, self.message)
    }
}

/// Validates a parsed configuration.
///
/// # Errors
///
/// Returns `ConfigurationError::RequiredConfigMissing` if the auth token is
/// absent and `ConfigurationError::ValidationFailed` listing every other problem.
pub fn validate_config(config: &KantokuConfig) -> ConfigurationResult<()> {
    if !config.has_auth_token() {
        return Err(ConfigurationError::RequiredConfigMissing {
            key: "auth_token".to_string(),
        });
    }

    let mut errors = Vec::new();
    for (index, org) in config.orgs.iter().enumerate() {
        validate_organization(&format!("orgs[{}]", index), org, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigurationError::ValidationFailed {
            error_count: errors.len(),
            errors,
        })
    }
}

fn validate_organization(prefix: &str, org: &OrganizationSpec, errors: &mut Vec<ValidationError>) {
    if org.org.trim().is_empty() {
        errors.push(ValidationError::new(
            &format!("{}.org", prefix),
            "Organization name is empty",
        ));
    }

    for (i, hook) in org.hooks.iter().enumerate() {
        if hook.url.trim().is_empty() {
            errors.push(ValidationError::new(
                &format!("{}.hooks[{}].url", prefix, i),
                "Hook URL is empty",
            ));
        }
    }
    check_unique_keys(
        &format!("{}.hooks", prefix),
        org.hooks.iter().map(|h| h.url.clone()),
        errors,
    );

    for (i, service) in org.services.iter().enumerate() {
        if service.name.trim().is_empty() {
            errors.push(ValidationError::new(
                &format!("{}.services[{}].name", prefix, i),
                "Service name is empty",
            ));
        }
    }
    check_unique_keys(
        &format!("{}.services", prefix),
        org.services.iter().map(|s| s.key()),
        errors,
    );

    for (i, label) in org.labels.iter().enumerate() {
        if !label.has_valid_color() {
            errors.push(ValidationError::new(
                &format!("{}.labels[{}].color", prefix, i),
                "Label colour must be six hexadecimal digits without '#'",
            ));
        }
    }
    check_unique_keys(
        &format!("{}.labels", prefix),
        org.labels.iter().map(|l| l.name.clone()),
        errors,
    );

    for (i, file) in org.files.iter().enumerate() {
        if file.resolved_content().is_none() {
            errors.push(ValidationError::new(
                &format!("{}.files[{}]", prefix, i),
                &format!("No content source for '{}'; set a template", file.path),
            ));
        }
    }
    check_unique_keys(
        &format!("{}.files", prefix),
        org.files.iter().map(|f| f.path.clone()),
        errors,
    );
}

fn check_unique_keys<I>(field_path: &str, keys: I, errors: &mut Vec<ValidationError>)
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key.clone()) {
            errors.push(ValidationError::new(
                field_path,
                &format!("Duplicate entry '{}'", key),
            ));
        }
    }
}
