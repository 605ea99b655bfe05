//! Reconciliation engine for kantoku.
//!
//! Given the organizations of a configuration and a [`RepositoryClient`],
//! the [`Auditor`] compares every repository with the hooks, services,
//! labels and files its organization requires. Discrepancies are reported
//! through an [`EventSink`]; outside verify-only mode missing items are
//! created.
//!
//! [`RepositoryClient`]: github_client::RepositoryClient

pub mod auditor;
pub mod context;
pub mod errors;
pub mod events;
pub mod exclusion;
pub mod file_manager;
pub mod hook_payload;
pub mod label_manager;
pub mod reconciler;
pub mod webhook_manager;

#[cfg(test)]
mod test_support;

pub use auditor::{AuditSummary, Auditor};
pub use context::{AuditOptions, RepositoryContext};
pub use errors::{AuditError, AuditResult};
pub use events::{AuditEvent, EventCounts, EventKind, EventSink, Lane, MemorySink, Reporter};
pub use exclusion::Excludable;
pub use file_manager::{FileManager, FilePresence};
pub use hook_payload::{hook_config, normalize_hook_config, service_hook_payload, web_hook_payload};
pub use label_manager::LabelManager;
pub use reconciler::{reconcile, DesiredItem, ObservedItem, ObservedService, ObservedWebHook, Reconciliation};
pub use webhook_manager::WebhookManager;
