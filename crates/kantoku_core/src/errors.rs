//! Error types for audit runs.
//!
//! Only listing failures are errors: a lane that cannot read the observed
//! state of a repository cannot reconcile it. Every item-level problem is
//! reported as an [`AuditEvent`](crate::AuditEvent) instead.

use thiserror::Error;

use crate::Lane;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to list repositories of organization {org}: {source}")]
    ListRepositoriesFailed {
        org: String,
        #[source]
        source: github_client::Error,
    },

    #[error("Failed to list {lane}s of {owner}/{repo}: {source}")]
    ListFailed {
        lane: Lane,
        owner: String,
        repo: String,
        #[source]
        source: github_client::Error,
    },
}

/// Result type alias for audit operations.
pub type AuditResult<T> = Result<T, AuditError>;
