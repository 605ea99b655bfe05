//! kantoku CLI library exports for integration testing.
//!
//! The binary in `main.rs` is a thin wrapper around [`audit_cmd::execute`].

pub mod audit_cmd;
pub mod console;
pub mod errors;
