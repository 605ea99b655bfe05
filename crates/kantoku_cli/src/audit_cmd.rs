//! The audit command.
//!
//! Loads the configuration, builds an authenticated client and runs the
//! [`Auditor`] over every configured organization.

use std::path::PathBuf;

use clap::Args;
use config_manager::{KantokuConfig, DEFAULT_CONFIG_PATH};
use github_client::{ClientSettings, GitHubClient, RepositoryClient, DEFAULT_API_BASE_URL};
use kantoku_core::{AuditOptions, AuditSummary, Auditor, EventSink};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

use crate::errors::Error;

#[cfg(test)]
#[path = "audit_cmd_tests.rs"]
mod tests;

/// Command-line options of an audit run.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AuditArgs {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Print a line for every organization and repository visited
    #[arg(short, long)]
    pub verbose: bool,

    /// Report discrepancies without changing anything
    #[arg(short, long)]
    pub noop: bool,

    /// Also report hooks, services and labels that are not configured
    #[arg(long = "new")]
    pub report_new: bool,
}

impl AuditArgs {
    /// Combines the command-line switches with the configuration file settings.
    pub fn options(&self, config: &KantokuConfig) -> AuditOptions {
        AuditOptions {
            noop: self.noop,
            report_new: self.report_new,
            verbose: self.verbose,
            strict_file_checks: config.strict_file_checks,
        }
    }
}

/// Loads and validates the configuration named by `args`.
///
/// # Errors
///
/// Returns `Error::Config` if the file cannot be loaded, has no auth token or
/// fails validation.
pub fn load_config(args: &AuditArgs) -> Result<KantokuConfig, Error> {
    debug!(path = %args.config.display(), "Loading configuration");
    Ok(KantokuConfig::load(&args.config)?)
}

/// Builds the connection settings for the configured GitHub instance.
///
/// # Errors
///
/// Returns `Error::Config` if no auth token is configured.
pub fn client_settings(config: &KantokuConfig) -> Result<ClientSettings, Error> {
    let token = config
        .auth_token
        .as_ref()
        .map(|t| SecretString::from(t.expose_secret().to_string()))
        .ok_or_else(|| Error::Config("Missing required configuration: auth_token".to_string()))?;

    Ok(ClientSettings {
        token,
        api_base_url: config
            .api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        request_timeout: config.request_timeout(),
    })
}

/// Audits every organization of `config` through `client`.
pub async fn run_audit(
    client: &dyn RepositoryClient,
    config: &KantokuConfig,
    options: AuditOptions,
    sink: &mut dyn EventSink,
) -> AuditSummary {
    let auditor = Auditor::new(client, options);
    let summary = auditor.run(&config.orgs, sink).await;

    info!(
        organizations = summary.organizations,
        repositories = summary.repositories,
        skipped = summary.skipped_repositories,
        created = summary.counts.created,
        new_items = summary.counts.new_items,
        missing = summary.counts.missing,
        duplicates = summary.counts.duplicates,
        failures = summary.counts.failures,
        "Audit finished"
    );
    summary
}

/// Runs a complete audit as described by `args`.
///
/// # Errors
///
/// Returns an error only for problems found before the first API request.
/// Discrepancies found during the run are delivered to `sink`.
pub async fn execute(args: &AuditArgs, sink: &mut dyn EventSink) -> Result<AuditSummary, Error> {
    let config = load_config(args)?;
    let options = args.options(&config);
    let client = GitHubClient::from_settings(client_settings(&config)?)?;

    Ok(run_audit(&client, &config, options, sink).await)
}
