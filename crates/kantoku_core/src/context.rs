//! Shared state handed to each lane.

use github_client::Repository;

use crate::events::{AuditEvent, EventKind, Lane, Reporter};
use crate::reconciler::{ObservedItem, Reconciliation};

/// Run-wide switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditOptions {
    /// Verify-only mode: report discrepancies, never write
    pub noop: bool,

    /// Report observed items that are not in the configuration
    pub report_new: bool,

    /// Emit a trace event per organization and repository
    pub verbose: bool,

    /// Report failed file checks instead of treating the file as missing
    pub strict_file_checks: bool,
}

/// The repository a lane is reconciling.
#[derive(Debug, Clone, Copy)]
pub struct RepositoryContext<'a> {
    /// Organization name from the configuration
    pub org: &'a str,

    pub repository: &'a Repository,
}

impl<'a> RepositoryContext<'a> {
    pub fn new(org: &'a str, repository: &'a Repository) -> Self {
        Self { org, repository }
    }

    pub fn owner(&self) -> &str {
        self.repository.owner_login()
    }

    pub fn repo(&self) -> &str {
        &self.repository.name
    }

    pub fn event(&self, lane: Lane, subject: &str, kind: EventKind) -> AuditEvent {
        AuditEvent::new(self.org, self.repo(), lane, subject, kind)
    }
}

/// Reports the duplicate and, when enabled, unexpected items of a reconciliation.
pub(crate) fn report_observations<D, O>(
    ctx: &RepositoryContext<'_>,
    lane: Lane,
    reconciliation: &Reconciliation<'_, D, O>,
    options: &AuditOptions,
    reporter: &mut Reporter<'_>,
) where
    O: ObservedItem,
{
    if options.report_new {
        for item in &reconciliation.unexpected {
            reporter.emit(ctx.event(lane, &item.describe(), EventKind::New));
        }
    }

    for item in &reconciliation.duplicates {
        reporter.emit(ctx.event(lane, &item.describe(), EventKind::Duplicate));
    }
}
