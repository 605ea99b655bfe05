//! Desired-state setting types.
//!
//! Each type describes one item an organization's repositories must carry.

pub mod file;
pub mod label;
pub mod service;
pub mod webhook;

// Re-export all types for convenient access
pub use file::{FileSpec, LICENSE_FILE_NAME, LICENSE_TEXT};
pub use label::LabelSpec;
pub use service::ServiceSpec;
pub use webhook::HookSpec;

/// GitHub's default event list for new hooks.
pub(crate) fn default_events() -> Vec<String> {
    vec!["push".to_string()]
}
