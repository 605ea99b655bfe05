//! Generic webhook and service hook lanes.
//!
//! Both lanes read the same hook listing and keep only the hooks of their
//! own [`HookKind`](github_client::HookKind).

use config_manager::{HookSpec, ServiceSpec};
use github_client::{RepositoryClient, RepositoryHook};
use tracing::{debug, info};

use crate::context::{report_observations, AuditOptions, RepositoryContext};
use crate::events::{EventKind, Lane, Reporter};
use crate::hook_payload::{service_hook_payload, web_hook_payload};
use crate::reconciler::{reconcile, ObservedService, ObservedWebHook};
use crate::{AuditError, AuditResult};

#[cfg(test)]
#[path = "webhook_manager_tests.rs"]
mod tests;

/// Reconciles the hooks of a repository with its organization's configuration.
pub struct WebhookManager<'a> {
    client: &'a dyn RepositoryClient,
}

impl<'a> WebhookManager<'a> {
    pub fn new(client: &'a dyn RepositoryClient) -> Self {
        Self { client }
    }

    /// Reconciles the generic webhooks of a repository.
    ///
    /// # Behavior
    ///
    /// 1. Lists the hooks of the repository and keeps those named `web`
    /// 2. Reports duplicates, and unknown hooks when `report_new` is set
    /// 3. For every configured URL that is absent and not excluded, reports it
    ///    as missing in verify-only mode or creates it otherwise
    ///
    /// # Errors
    ///
    /// Returns `AuditError::ListFailed` if the hooks cannot be listed. Creation
    /// failures are reported as events and do not stop the lane.
    pub async fn audit_web_hooks(
        &self,
        ctx: &RepositoryContext<'_>,
        specs: &[HookSpec],
        options: &AuditOptions,
        reporter: &mut Reporter<'_>,
    ) -> AuditResult<()> {
        let hooks = self.list_hooks(ctx, Lane::WebHook).await?;
        let reconciliation = reconcile(ctx.repo(), specs, ObservedWebHook::select(&hooks));
        report_observations(ctx, Lane::WebHook, &reconciliation, options, reporter);

        for spec in &reconciliation.excluded {
            debug!(repo = ctx.repo(), url = %spec.url, "Hook excluded for repository");
        }

        for spec in reconciliation.missing {
            if options.noop {
                reporter.emit(ctx.event(Lane::WebHook, &spec.url, EventKind::Missing));
                continue;
            }

            let payload = web_hook_payload(spec);
            match self
                .client
                .create_hook(ctx.owner(), ctx.repo(), &payload)
                .await
            {
                Ok(hook) => {
                    info!(repo = ctx.repo(), url = %spec.url, hook_id = hook.id, "Created web hook");
                    reporter.emit(ctx.event(Lane::WebHook, &spec.url, EventKind::Created));
                }
                Err(e) => {
                    debug!(repo = ctx.repo(), url = %spec.url, error = ?e, "Failed to create web hook");
                    reporter.emit(ctx.event(
                        Lane::WebHook,
                        &spec.url,
                        EventKind::CreateFailed {
                            reason: e.to_string(),
                        },
                    ));
                }
            }
        }

        Ok(())
    }

    /// Reconciles the legacy service hooks of a repository.
    ///
    /// Services are matched on their lower-cased name and reported under the
    /// name given in the configuration.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::ListFailed` if the hooks cannot be listed.
    pub async fn audit_services(
        &self,
        ctx: &RepositoryContext<'_>,
        specs: &[ServiceSpec],
        options: &AuditOptions,
        reporter: &mut Reporter<'_>,
    ) -> AuditResult<()> {
        let hooks = self.list_hooks(ctx, Lane::Service).await?;
        let reconciliation = reconcile(ctx.repo(), specs, ObservedService::select(&hooks));
        report_observations(ctx, Lane::Service, &reconciliation, options, reporter);

        for spec in reconciliation.missing {
            let name = &spec.name;
            if options.noop {
                reporter.emit(ctx.event(Lane::Service, name, EventKind::Missing));
                continue;
            }

            let payload = service_hook_payload(spec);
            match self
                .client
                .create_hook(ctx.owner(), ctx.repo(), &payload)
                .await
            {
                Ok(hook) => {
                    info!(repo = ctx.repo(), service = %name, hook_id = hook.id, "Created service hook");
                    reporter.emit(ctx.event(Lane::Service, name, EventKind::Created));
                }
                Err(e) => {
                    debug!(repo = ctx.repo(), service = %name, error = ?e, "Failed to create service hook");
                    reporter.emit(ctx.event(
                        Lane::Service,
                        name,
                        EventKind::CreateFailed {
                            reason: e.to_string(),
                        },
                    ));
                }
            }
        }

        Ok(())
    }

    /// Lists every hook currently registered on a repository.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::ListFailed` tagged with `lane` if the API call fails.
    pub async fn list_hooks(
        &self,
        ctx: &RepositoryContext<'_>,
        lane: Lane,
    ) -> AuditResult<Vec<RepositoryHook>> {
        self.client
            .list_hooks(ctx.owner(), ctx.repo())
            .await
            .map_err(|source| AuditError::ListFailed {
                lane,
                owner: ctx.owner().to_string(),
                repo: ctx.repo().to_string(),
                source,
            })
    }
}
