//! Crate for interacting with the GitHub REST API.
//!
//! This crate provides the [`RepositoryClient`] seam used by the auditor and
//! [`GitHubClient`], its implementation backed by a token-authenticated
//! octocrab client. File creation, which needs the raw response status, goes
//! through a plain reqwest client against the repository contents URL.

use std::time::Duration;

use async_trait::async_trait;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument};
use url::Url;

pub mod contents;
pub mod errors;
pub mod label;
pub mod repository;
pub mod webhook;

pub use contents::{FileCreateBody, FileCreateRequest, FileCreateResponse};
pub use errors::Error;
pub use label::{Label, LabelCreatePayload};
pub use repository::{Repository, RepositoryOwner};
pub use webhook::{
    HookConfigPayload, HookCreatePayload, HookKind, RepositoryHook, ServiceHookConfig,
    WebHookConfig, GENERIC_HOOK_NAME,
};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Default GitHub REST API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Default connect and read timeout for every request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const PER_PAGE: u8 = 100;
const USER_AGENT: &str = concat!("kantoku/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Connection settings for [`GitHubClient`].
#[derive(Debug)]
pub struct ClientSettings {
    /// Personal access token used for every request
    pub token: SecretString,

    /// Base URL of the REST API
    pub api_base_url: String,

    /// Connect and read timeout applied to each request
    pub request_timeout: Duration,
}

impl ClientSettings {
    /// Creates settings for the public GitHub API with the default timeout.
    pub fn new(token: SecretString) -> Self {
        Self {
            token,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Trait for the repository operations the auditor relies on.
///
/// Every method performs exactly one logical remote operation. Listing methods
/// follow pagination until the last page.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Lists every repository of an organization.
    async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>, Error>;

    /// Lists every hook (generic and service) registered on a repository.
    async fn list_hooks(&self, owner: &str, repo: &str) -> Result<Vec<RepositoryHook>, Error>;

    /// Registers a new hook on a repository.
    async fn create_hook(
        &self,
        owner: &str,
        repo: &str,
        payload: &HookCreatePayload,
    ) -> Result<RepositoryHook, Error>;

    /// Lists every label defined on a repository.
    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error>;

    /// Creates a label on a repository.
    async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        payload: &LabelCreatePayload,
    ) -> Result<Label, Error>;

    /// Fetches a file at the head of the default branch.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` when the file does not exist. Any other error
    /// means the presence of the file could not be determined.
    async fn get_file(&self, owner: &str, repo: &str, path: &str) -> Result<(), Error>;

    /// Creates a file through the repository contents URL.
    ///
    /// The response status is returned unchanged; only transport failures and
    /// an unusable contents URL are reported as errors.
    async fn create_file(
        &self,
        repository: &Repository,
        request: &FileCreateRequest,
    ) -> Result<FileCreateResponse, Error>;
}

/// A client for interacting with the GitHub API, authenticated with a personal token.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
    http: reqwest::Client,
    token: SecretString,
}

#[derive(Serialize)]
struct PageParameters {
    per_page: u8,
    page: u32,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from connection settings.
    ///
    /// # Errors
    ///
    /// Returns an `Error::AuthError` if either HTTP client cannot be built.
    pub fn from_settings(settings: ClientSettings) -> Result<Self, Error> {
        let client = create_token_client(
            settings.token.expose_secret(),
            &settings.api_base_url,
            settings.request_timeout,
        )?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(settings.request_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| Error::AuthError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            http,
            token: settings.token,
        })
    }

    async fn get_all_pages<T>(&self, route: &str) -> Result<Vec<T>, octocrab::Error>
    where
        T: DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut page = 1;
        loop {
            let params = PageParameters {
                per_page: PER_PAGE,
                page,
            };
            let batch: Vec<T> = self.client.get(route, Some(&params)).await?;
            let last_page = batch.len() < usize::from(PER_PAGE);
            items.extend(batch);
            if last_page {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    #[instrument(skip(self))]
    async fn list_org_repositories(&self, org: &str) -> Result<Vec<Repository>, Error> {
        let route = format!("/orgs/{}/repos", org);
        let repositories: Vec<Repository> = self
            .get_all_pages(&route)
            .await
            .map_err(|e| map_octocrab_error("Failed to list organization repositories", e))?;

        info!(
            org = org,
            count = repositories.len(),
            "Retrieved organization repositories"
        );
        Ok(repositories)
    }

    #[instrument(skip(self))]
    async fn list_hooks(&self, owner: &str, repo: &str) -> Result<Vec<RepositoryHook>, Error> {
        let route = format!("/repos/{}/{}/hooks", owner, repo);
        let hooks: Vec<RepositoryHook> = self
            .get_all_pages(&route)
            .await
            .map_err(|e| map_octocrab_error("Failed to list repository hooks", e))?;

        debug!(owner = owner, repo = repo, count = hooks.len(), "Listed hooks");
        Ok(hooks)
    }

    #[instrument(skip(self, payload), fields(hook = %payload.name))]
    async fn create_hook(
        &self,
        owner: &str,
        repo: &str,
        payload: &HookCreatePayload,
    ) -> Result<RepositoryHook, Error> {
        let route = format!("/repos/{}/{}/hooks", owner, repo);
        let hook: RepositoryHook = self
            .client
            .post(route, Some(payload))
            .await
            .map_err(|e| map_octocrab_error("Failed to create repository hook", e))?;

        info!(owner = owner, repo = repo, hook_id = hook.id, "Created hook");
        Ok(hook)
    }

    #[instrument(skip(self))]
    async fn list_labels(&self, owner: &str, repo: &str) -> Result<Vec<Label>, Error> {
        let route = format!("/repos/{}/{}/labels", owner, repo);
        let labels: Vec<Label> = self
            .get_all_pages(&route)
            .await
            .map_err(|e| map_octocrab_error("Failed to list repository labels", e))?;

        debug!(owner = owner, repo = repo, count = labels.len(), "Listed labels");
        Ok(labels)
    }

    #[instrument(skip(self, payload), fields(label = %payload.name))]
    async fn create_label(
        &self,
        owner: &str,
        repo: &str,
        payload: &LabelCreatePayload,
    ) -> Result<Label, Error> {
        let route = format!("/repos/{}/{}/labels", owner, repo);
        let label: Label = self
            .client
            .post(route, Some(payload))
            .await
            .map_err(|e| map_octocrab_error("Failed to create repository label", e))?;

        info!(owner = owner, repo = repo, label = %label.name, "Created label");
        Ok(label)
    }

    #[instrument(skip(self))]
    async fn get_file(&self, owner: &str, repo: &str, path: &str) -> Result<(), Error> {
        let route = contents_route(owner, repo, path)?;
        let _: serde_json::Value = self
            .client
            .get(route, None::<&()>)
            .await
            .map_err(|e| map_octocrab_error("Failed to fetch file contents", e))?;

        Ok(())
    }

    #[instrument(skip(self, repository, request), fields(repo = %repository.full_name, path = %request.path))]
    async fn create_file(
        &self,
        repository: &Repository,
        request: &FileCreateRequest,
    ) -> Result<FileCreateResponse, Error> {
        let target = repository
            .contents_url_for(&request.path)
            .ok_or_else(|| Error::InvalidContentsUrl(repository.full_name.clone()))?;
        let url = Url::parse(&target)
            .map_err(|e| Error::InvalidContentsUrl(format!("{}: {}", target, e)))?;

        let response = self
            .http
            .put(url.clone())
            .header(AUTHORIZATION, format!("token {}", self.token.expose_secret()))
            .header(ACCEPT, GITHUB_JSON)
            .json(&request.body())
            .send()
            .await
            .map_err(|e| {
                debug!(url = %url, error = %e, "File creation request failed");
                Error::Transport(e.to_string())
            })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        debug!(url = %url, status = status, "File creation request completed");
        Ok(FileCreateResponse { status, body })
    }
}

/// Creates an `Octocrab` client authenticated with a personal access token.
///
/// Retries are disabled so every call maps to exactly one request.
///
/// # Errors
///
/// Returns an `Error::AuthError` if the base URL is invalid or the client
/// cannot be built.
#[instrument(skip(token))]
pub fn create_token_client(
    token: &str,
    api_base_url: &str,
    request_timeout: Duration,
) -> Result<Octocrab, Error> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .base_uri(api_base_url)
        .map_err(|e| Error::AuthError(format!("Invalid API base URL {}: {}", api_base_url, e)))?
        .add_retry_config(RetryConfig::None)
        .set_connect_timeout(Some(request_timeout))
        .set_read_timeout(Some(request_timeout))
        .build()
        .map_err(|e| {
            debug!(error = ?e, "Failed to build Octocrab client");
            Error::AuthError("Failed to build the GitHub API client.".to_string())
        })
}

/// Builds the contents API route for a file, percent-encoding every segment.
///
/// # Errors
///
/// Returns `Error::InvalidContentsUrl` if the route cannot be assembled.
pub fn contents_route(owner: &str, repo: &str, path: &str) -> Result<String, Error> {
    let invalid = || Error::InvalidContentsUrl(format!("{}/{}: {}", owner, repo, path));

    let mut url = Url::parse(DEFAULT_API_BASE_URL).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .clear()
        .extend(["repos", owner, repo, "contents"])
        .extend(path.split('/').filter(|segment| !segment.is_empty()));

    Ok(url.path().to_string())
}

fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    log_octocrab_error(message, &e);

    match &e {
        octocrab::Error::GitHub { source, .. } => {
            let status = source.status_code.as_u16();
            if status == 404 {
                return Error::NotFound;
            }

            if (status == 403 || status == 429)
                && source.message.to_ascii_lowercase().contains("rate limit")
            {
                return Error::RateLimitExceeded;
            }

            Error::ApiError {
                status,
                message: source.message.clone(),
            }
        }
        octocrab::Error::Hyper { .. } | octocrab::Error::Service { .. } => {
            Error::Transport(e.to_string())
        }
        _ => Error::InvalidResponse,
    }
}

fn log_octocrab_error(message: &str, e: &octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            debug!(
                error_message = %err.message,
                status = err.status_code.as_u16(),
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => debug!(
            error_message = %source,
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),

        octocrab::Error::Uri { source, backtrace } => debug!(
            error_message = %source,
            backtrace = backtrace.to_string(),
            "{}, Failed to parse URI.",
            message
        ),
        octocrab::Error::InvalidHeaderValue { source, backtrace } => debug!(
            error_message = %source,
            backtrace = backtrace.to_string(),
            "{}. One of the header values was invalid.",
            message
        ),
        octocrab::Error::InvalidUtf8 { source, backtrace } => debug!(
            error_message = %source,
            backtrace = backtrace.to_string(),
            "{}. The message wasn't valid UTF-8.",
            message,
        ),
        _ => debug!(error_message = %e, message),
    };
}
