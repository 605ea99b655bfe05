//! The audit run: organizations, then repositories, then lanes.

use config_manager::OrganizationSpec;
use github_client::{Repository, RepositoryClient};
use tracing::{debug, info, instrument};

use crate::context::{AuditOptions, RepositoryContext};
use crate::events::{AuditEvent, EventCounts, EventKind, EventSink, Reporter};
use crate::file_manager::FileManager;
use crate::label_manager::LabelManager;
use crate::webhook_manager::WebhookManager;
use crate::{AuditError, AuditResult};

#[cfg(test)]
#[path = "auditor_tests.rs"]
mod tests;

/// Totals for a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub organizations: usize,
    pub repositories: usize,
    /// Repositories skipped by an organization-level exclusion
    pub skipped_repositories: usize,
    pub counts: EventCounts,
}

impl AuditSummary {
    /// Returns true if no discrepancy or failure was reported.
    pub fn is_clean(&self) -> bool {
        self.counts.missing == 0 && self.counts.duplicates == 0 && self.counts.failures == 0
    }

    pub fn has_changes(&self) -> bool {
        self.counts.created > 0
    }
}

/// Walks every configured organization and reconciles its repositories.
///
/// Requests are awaited one at a time, in a fixed order: for each
/// repository hooks, labels, services, then files.
pub struct Auditor<'a> {
    client: &'a dyn RepositoryClient,
    options: AuditOptions,
}

impl<'a> Auditor<'a> {
    pub fn new(client: &'a dyn RepositoryClient, options: AuditOptions) -> Self {
        Self { client, options }
    }

    /// Audits every organization in configuration order.
    ///
    /// Failures never abort the run: an organization whose repositories
    /// cannot be listed and a lane that cannot be read are both reported as
    /// check failures and the run moves on.
    #[instrument(skip_all, fields(organizations = orgs.len(), noop = self.options.noop))]
    pub async fn run(&self, orgs: &[OrganizationSpec], sink: &mut dyn EventSink) -> AuditSummary {
        let mut reporter = Reporter::new(sink);
        let mut summary = AuditSummary::default();

        for org in orgs {
            summary.organizations += 1;
            if self.options.verbose {
                reporter.emit(AuditEvent::visited(&org.org, ""));
            }

            let repositories = match self.list_repositories(&org.org).await {
                Ok(repositories) => repositories,
                Err(e) => {
                    debug!(org = %org.org, error = %e, "Skipping organization");
                    reporter.emit(AuditEvent {
                        org: org.org.clone(),
                        repo: String::new(),
                        lane: None,
                        subject: String::new(),
                        kind: EventKind::CheckFailed {
                            reason: e.to_string(),
                        },
                    });
                    continue;
                }
            };

            for repository in &repositories {
                if self.options.verbose {
                    reporter.emit(AuditEvent::visited(&org.org, &repository.name));
                }

                if org.is_repository_excluded(&repository.name) {
                    debug!(org = %org.org, repo = %repository.name, "Repository excluded");
                    summary.skipped_repositories += 1;
                    continue;
                }

                summary.repositories += 1;
                let ctx = RepositoryContext::new(&org.org, repository);
                self.audit_repository(&ctx, org, &mut reporter).await;
            }
        }

        summary.counts = reporter.counts().clone();
        info!(
            organizations = summary.organizations,
            repositories = summary.repositories,
            created = summary.counts.created,
            missing = summary.counts.missing,
            failures = summary.counts.failures,
            "Audit complete"
        );
        summary
    }

    /// Runs the four lanes against one repository.
    ///
    /// A lane runs when the organization configures items for it, or when
    /// new items are reported.
    pub async fn audit_repository(
        &self,
        ctx: &RepositoryContext<'_>,
        org: &OrganizationSpec,
        reporter: &mut Reporter<'_>,
    ) {
        let hooks = WebhookManager::new(self.client);
        let labels = LabelManager::new(self.client);
        let files = FileManager::new(self.client);
        let report_new = self.options.report_new;

        if !org.hooks.is_empty() || report_new {
            let result = hooks
                .audit_web_hooks(ctx, &org.hooks, &self.options, reporter)
                .await;
            report_lane_failure(ctx, result, reporter);
        }

        if !org.labels.is_empty() || report_new {
            let result = labels
                .audit_labels(ctx, &org.labels, &self.options, reporter)
                .await;
            report_lane_failure(ctx, result, reporter);
        }

        if !org.services.is_empty() || report_new {
            let result = hooks
                .audit_services(ctx, &org.services, &self.options, reporter)
                .await;
            report_lane_failure(ctx, result, reporter);
        }

        if !org.files.is_empty() {
            files
                .audit_files(ctx, &org.files, &self.options, reporter)
                .await;
        }
    }

    async fn list_repositories(&self, org: &str) -> AuditResult<Vec<Repository>> {
        self.client
            .list_org_repositories(org)
            .await
            .map_err(|source| AuditError::ListRepositoriesFailed {
                org: org.to_string(),
                source,
            })
    }
}

fn report_lane_failure(
    ctx: &RepositoryContext<'_>,
    result: AuditResult<()>,
    reporter: &mut Reporter<'_>,
) {
    let Err(err) = result else {
        return;
    };

    debug!(repo = ctx.repo(), error = %err, "Lane could not be checked");
    let (lane, reason) = match err {
        AuditError::ListFailed { lane, source, .. } => (Some(lane), source.to_string()),
        other => (None, other.to_string()),
    };
    reporter.emit(AuditEvent {
        org: ctx.org.to_string(),
        repo: ctx.repo().to_string(),
        lane,
        subject: String::new(),
        kind: EventKind::CheckFailed { reason },
    });
}
