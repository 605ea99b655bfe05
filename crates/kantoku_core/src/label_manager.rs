//! Label lane.

use config_manager::LabelSpec;
use github_client::{LabelCreatePayload, RepositoryClient};
use tracing::{debug, info};

use crate::context::{report_observations, AuditOptions, RepositoryContext};
use crate::events::{EventKind, Lane, Reporter};
use crate::reconciler::reconcile;
use crate::{AuditError, AuditResult};

#[cfg(test)]
#[path = "label_manager_tests.rs"]
mod tests;

/// Reconciles the labels of a repository with its organization's configuration.
pub struct LabelManager<'a> {
    client: &'a dyn RepositoryClient,
}

impl<'a> LabelManager<'a> {
    pub fn new(client: &'a dyn RepositoryClient) -> Self {
        Self { client }
    }

    /// Reconciles the labels of a repository.
    ///
    /// Labels are matched on their exact name. A label that exists with a
    /// different colour counts as present.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::ListFailed` if the labels cannot be listed.
    pub async fn audit_labels(
        &self,
        ctx: &RepositoryContext<'_>,
        specs: &[LabelSpec],
        options: &AuditOptions,
        reporter: &mut Reporter<'_>,
    ) -> AuditResult<()> {
        let labels = self
            .client
            .list_labels(ctx.owner(), ctx.repo())
            .await
            .map_err(|source| AuditError::ListFailed {
                lane: Lane::Label,
                owner: ctx.owner().to_string(),
                repo: ctx.repo().to_string(),
                source,
            })?;

        let reconciliation = reconcile(ctx.repo(), specs, labels.iter());
        report_observations(ctx, Lane::Label, &reconciliation, options, reporter);

        for spec in reconciliation.missing {
            if options.noop {
                reporter.emit(ctx.event(Lane::Label, &spec.name, EventKind::Missing));
                continue;
            }

            let payload = LabelCreatePayload {
                name: spec.name.clone(),
                color: spec.color.clone(),
            };
            match self
                .client
                .create_label(ctx.owner(), ctx.repo(), &payload)
                .await
            {
                Ok(_) => {
                    info!(repo = ctx.repo(), label = %spec.name, "Created label");
                    reporter.emit(ctx.event(Lane::Label, &spec.name, EventKind::Created));
                }
                Err(e) => {
                    debug!(repo = ctx.repo(), label = %spec.name, error = ?e, "Failed to create label");
                    reporter.emit(ctx.event(
                        Lane::Label,
                        &spec.name,
                        EventKind::CreateFailed {
                            reason: e.to_string(),
                        },
                    ));
                }
            }
        }

        Ok(())
    }
}
