//! Set reconciliation between desired and observed items.
//!
//! [`reconcile`] is shared by the hook, service and label lanes. It is a pure
//! function: all remote calls happen in the lanes before and after it.

use std::collections::HashSet;

use config_manager::{HookSpec, LabelSpec, ServiceSpec};
use github_client::{HookKind, Label, RepositoryHook};

use crate::exclusion::Excludable;

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod tests;

/// An item from the configuration, identified by a key unique within its list.
pub trait DesiredItem: Excludable {
    fn key(&self) -> String;
}

/// An item read from a repository.
pub trait ObservedItem {
    /// Identity key, comparable with [`DesiredItem::key`].
    ///
    /// Items without a key take no part in matching or duplicate detection.
    fn key(&self) -> Option<String>;

    /// Identifying fields used when the item is reported.
    fn describe(&self) -> String;
}

/// Outcome of reconciling one lane of one repository.
#[derive(Debug)]
pub struct Reconciliation<'d, D, O> {
    /// Desired items absent from the repository, in configuration order
    pub missing: Vec<&'d D>,

    /// Desired items absent from the repository but exempt for it
    pub excluded: Vec<&'d D>,

    /// Observed items whose key was already seen earlier in the pass
    pub duplicates: Vec<O>,

    /// Observed items whose key is not desired
    pub unexpected: Vec<O>,
}

impl<D, O> Reconciliation<'_, D, O> {
    /// Returns true if nothing is missing and nothing is duplicated.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.duplicates.is_empty()
    }
}

/// Compares the desired items with the observed items of one repository.
///
/// Every observed item whose key is desired marks that key as present. An
/// observed key seen a second time is a duplicate; exclusions never hide
/// duplicates. Desired keys still unmatched at the end are missing unless
/// `repo` appears in the item's exclusion list.
pub fn reconcile<'d, D, O, I>(repo: &str, desired: &'d [D], observed: I) -> Reconciliation<'d, D, O>
where
    D: DesiredItem,
    O: ObservedItem + Clone,
    I: IntoIterator<Item = O>,
{
    let desired_keys: HashSet<String> = desired.iter().map(|d| d.key()).collect();
    let mut still_missing = desired_keys.clone();
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    let mut unexpected = Vec::new();

    for item in observed {
        let Some(key) = item.key() else {
            continue;
        };

        if desired_keys.contains(&key) {
            still_missing.remove(&key);
        } else {
            unexpected.push(item.clone());
        }

        if !seen.insert(key) {
            duplicates.push(item);
        }
    }

    let mut missing = Vec::new();
    let mut excluded = Vec::new();
    for item in desired {
        if !still_missing.contains(&item.key()) {
            continue;
        }

        if item.is_excluded_for(repo) {
            excluded.push(item);
        } else {
            missing.push(item);
        }
    }

    Reconciliation {
        missing,
        excluded,
        duplicates,
        unexpected,
    }
}

impl DesiredItem for HookSpec {
    fn key(&self) -> String {
        self.url.clone()
    }
}

impl DesiredItem for ServiceSpec {
    fn key(&self) -> String {
        ServiceSpec::key(self)
    }
}

impl DesiredItem for LabelSpec {
    fn key(&self) -> String {
        self.name.clone()
    }
}

/// A generic webhook, keyed by its target URL.
#[derive(Debug, Clone, Copy)]
pub struct ObservedWebHook<'a>(pub &'a RepositoryHook);

/// A service hook, keyed by its lower-cased name.
#[derive(Debug, Clone, Copy)]
pub struct ObservedService<'a>(pub &'a RepositoryHook);

impl<'a> ObservedWebHook<'a> {
    /// Selects the generic webhooks from a hook listing.
    pub fn select(hooks: &'a [RepositoryHook]) -> impl Iterator<Item = Self> + 'a {
        hooks
            .iter()
            .filter(|h| h.kind == HookKind::Generic)
            .map(ObservedWebHook)
    }
}

impl<'a> ObservedService<'a> {
    /// Selects the service hooks from a hook listing.
    pub fn select(hooks: &'a [RepositoryHook]) -> impl Iterator<Item = Self> + 'a {
        hooks
            .iter()
            .filter(|h| h.kind == HookKind::Service)
            .map(ObservedService)
    }
}

impl ObservedItem for ObservedWebHook<'_> {
    fn key(&self) -> Option<String> {
        self.0.url.clone()
    }

    fn describe(&self) -> String {
        format!(
            "{} {}",
            self.0.url.as_deref().unwrap_or(&self.0.name),
            self.0.id
        )
    }
}

impl ObservedItem for ObservedService<'_> {
    fn key(&self) -> Option<String> {
        Some(self.0.name.to_lowercase())
    }

    fn describe(&self) -> String {
        format!("{} {}", self.0.name, self.0.id)
    }
}

impl ObservedItem for &Label {
    fn key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn describe(&self) -> String {
        format!("{} {}", self.name, self.color)
    }
}
