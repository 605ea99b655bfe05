//! Audit events and their delivery.
//!
//! Events are the user-visible output of an audit run. Informational events
//! (created, new, visited) and error events (missing, duplicate, failures)
//! are told apart by [`AuditEvent::is_error`] so a sink can route them to
//! different streams.

use std::fmt;

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;

/// The four kinds of item an organization can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    WebHook,
    Service,
    Label,
    File,
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = match self {
            Lane::WebHook => "web hook",
            Lane::Service => "service",
            Lane::Label => "label",
            Lane::File => "file",
        };
        f.write_str(noun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// An organization or repository was visited (verbose mode only)
    Visited,
    /// A missing item was created
    Created,
    /// An observed item is not part of the configuration
    New,
    /// A required item is absent (verify-only mode)
    Missing,
    /// Two observed items share an identity key
    Duplicate,
    /// Creating a missing item failed
    CreateFailed { reason: String },
    /// The observed state could not be read
    CheckFailed { reason: String },
}

/// A single reconciliation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    pub org: String,

    /// Empty for organization-level events
    pub repo: String,

    /// `None` for visit traces and organization-level failures
    pub lane: Option<Lane>,

    /// Identifying fields of the item, e.g. a hook URL or label name
    pub subject: String,

    pub kind: EventKind,
}

impl AuditEvent {
    pub fn new(org: &str, repo: &str, lane: Lane, subject: &str, kind: EventKind) -> Self {
        Self {
            org: org.to_string(),
            repo: repo.to_string(),
            lane: Some(lane),
            subject: subject.to_string(),
            kind,
        }
    }

    /// A verbose trace line for an organization or repository.
    pub fn visited(org: &str, repo: &str) -> Self {
        Self {
            org: org.to_string(),
            repo: repo.to_string(),
            lane: None,
            subject: String::new(),
            kind: EventKind::Visited,
        }
    }

    /// Returns true for events that belong on the error stream.
    pub fn is_error(&self) -> bool {
        !matches!(
            self.kind,
            EventKind::Visited | EventKind::Created | EventKind::New
        )
    }
}

impl fmt::Display for AuditEvent {
    /// Formats the event as `<org> <repo> <subject> <message>`, skipping empty parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lane = self.lane.map(|l| l.to_string()).unwrap_or_default();
        let message = match &self.kind {
            EventKind::Visited => String::new(),
            EventKind::Created => format!("created {}", lane),
            EventKind::New => format!("new {}", lane),
            EventKind::Missing => format!("missing {}", lane),
            EventKind::Duplicate => format!("duplicate {}", lane),
            EventKind::CreateFailed { reason } => format!("failed to create {}: {}", lane, reason),
            EventKind::CheckFailed { reason } if lane.is_empty() => format!("check failed: {}", reason),
            EventKind::CheckFailed { reason } => format!("unable to check {}: {}", lane, reason),
        };

        let parts: Vec<&str> = [
            self.org.as_str(),
            self.repo.as_str(),
            self.subject.as_str(),
            message.as_str(),
        ]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();

        f.write_str(&parts.join(" "))
    }
}

/// Destination for audit events.
pub trait EventSink {
    fn emit(&mut self, event: AuditEvent);
}

/// An [`EventSink`] that keeps every event in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<AuditEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events of one kind, in emission order.
    pub fn of_kind(&self, kind: &EventKind) -> Vec<&AuditEvent> {
        self.events.iter().filter(|e| &e.kind == kind).collect()
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, event: AuditEvent) {
        self.events.push(event);
    }
}

/// Counters for the events emitted during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCounts {
    pub created: usize,
    pub new_items: usize,
    pub missing: usize,
    pub duplicates: usize,
    pub failures: usize,
}

/// Forwards events to a sink while counting them.
pub struct Reporter<'a> {
    sink: &'a mut dyn EventSink,
    counts: EventCounts,
}

impl<'a> Reporter<'a> {
    pub fn new(sink: &'a mut dyn EventSink) -> Self {
        Self {
            sink,
            counts: EventCounts::default(),
        }
    }

    pub fn emit(&mut self, event: AuditEvent) {
        match event.kind {
            EventKind::Visited => {}
            EventKind::Created => self.counts.created += 1,
            EventKind::New => self.counts.new_items += 1,
            EventKind::Missing => self.counts.missing += 1,
            EventKind::Duplicate => self.counts.duplicates += 1,
            EventKind::CreateFailed { .. } | EventKind::CheckFailed { .. } => {
                self.counts.failures += 1
            }
        }
        self.sink.emit(event);
    }

    pub fn counts(&self) -> &EventCounts {
        &self.counts
    }
}
