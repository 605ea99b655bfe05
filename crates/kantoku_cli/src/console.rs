//! Terminal output for audit events.

use std::io::{self, Write};

use kantoku_core::{AuditEvent, EventSink};

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;

/// Writes informational events to one stream and error events to another.
///
/// [`ConsoleSink::stdio`] is the sink used by the binary: created and new
/// items go to stdout, everything needing attention goes to stderr.
pub struct ConsoleSink<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ConsoleSink<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleSink<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    /// Returns the output and error writers.
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> EventSink for ConsoleSink<O, E> {
    fn emit(&mut self, event: AuditEvent) {
        let stream: &mut dyn Write = if event.is_error() {
            &mut self.err
        } else {
            &mut self.out
        };

        // A closed terminal must not abort the audit.
        if let Err(e) = writeln!(stream, "{}", event) {
            tracing::debug!(error = %e, "Failed to write audit event");
        }
    }
}
