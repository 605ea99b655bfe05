//! Required file lane.
//!
//! Files are fetched one path at a time; there is no listing to reconcile, so
//! duplicates and unexpected files are never reported.

use config_manager::FileSpec;
use github_client::{Error as GitHubError, FileCreateRequest, RepositoryClient};
use tracing::{debug, info};

use crate::context::{AuditOptions, RepositoryContext};
use crate::events::{EventKind, Lane, Reporter};
use crate::exclusion::Excludable;

#[cfg(test)]
#[path = "file_manager_tests.rs"]
mod tests;

/// Result of checking a single path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePresence {
    Present,
    Absent,
    /// The check failed and strict checking is enabled
    Unknown { reason: String },
}

/// Ensures every repository carries the files its organization requires.
pub struct FileManager<'a> {
    client: &'a dyn RepositoryClient,
}

impl<'a> FileManager<'a> {
    pub fn new(client: &'a dyn RepositoryClient) -> Self {
        Self { client }
    }

    /// Checks and, outside verify-only mode, creates the required files.
    ///
    /// Excluded files are skipped without a request. A file whose fetch fails
    /// for any reason other than "not found" is treated as absent, unless
    /// `strict_file_checks` is set, in which case the failure is reported.
    pub async fn audit_files(
        &self,
        ctx: &RepositoryContext<'_>,
        specs: &[FileSpec],
        options: &AuditOptions,
        reporter: &mut Reporter<'_>,
    ) {
        for spec in specs {
            if spec.is_excluded_for(ctx.repo()) {
                debug!(repo = ctx.repo(), path = %spec.path, "File excluded for repository");
                continue;
            }

            match self.check_file(ctx, spec, options).await {
                FilePresence::Present => {}
                FilePresence::Unknown { reason } => {
                    reporter.emit(ctx.event(Lane::File, &spec.path, EventKind::CheckFailed { reason }));
                }
                FilePresence::Absent if options.noop => {
                    reporter.emit(ctx.event(Lane::File, &spec.path, EventKind::Missing));
                }
                FilePresence::Absent => {
                    let kind = self.create_file(ctx, spec).await;
                    reporter.emit(ctx.event(Lane::File, &spec.path, kind));
                }
            }
        }
    }

    /// Fetches one path to decide whether the file exists.
    pub async fn check_file(
        &self,
        ctx: &RepositoryContext<'_>,
        spec: &FileSpec,
        options: &AuditOptions,
    ) -> FilePresence {
        match self.client.get_file(ctx.owner(), ctx.repo(), &spec.path).await {
            Ok(()) => FilePresence::Present,
            Err(GitHubError::NotFound) => FilePresence::Absent,
            Err(e) if options.strict_file_checks => FilePresence::Unknown {
                reason: e.to_string(),
            },
            Err(e) => {
                debug!(
                    repo = ctx.repo(),
                    path = %spec.path,
                    error = ?e,
                    "File check failed, treating file as missing"
                );
                FilePresence::Absent
            }
        }
    }

    async fn create_file(&self, ctx: &RepositoryContext<'_>, spec: &FileSpec) -> EventKind {
        let Some(content) = spec.resolved_content() else {
            return EventKind::CreateFailed {
                reason: "no content available".to_string(),
            };
        };

        let request = FileCreateRequest {
            path: spec.path.clone(),
            message: spec.commit_message(),
            content: content.to_string(),
        };

        match self.client.create_file(ctx.repository, &request).await {
            Ok(response) if response.is_created() => {
                info!(repo = ctx.repo(), path = %spec.path, "Created file");
                EventKind::Created
            }
            Ok(response) => {
                debug!(
                    repo = ctx.repo(),
                    path = %spec.path,
                    status = response.status,
                    "File creation was rejected"
                );
                EventKind::CreateFailed {
                    reason: format!("status {}: {}", response.status, response.body),
                }
            }
            Err(e) => {
                debug!(repo = ctx.repo(), path = %spec.path, error = ?e, "Failed to create file");
                EventKind::CreateFailed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
