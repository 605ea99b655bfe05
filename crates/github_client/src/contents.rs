//! Repository contents types.
//!
//! File creation goes through GitHub's contents API with a direct HTTP `PUT`
//! to the repository's contents URL. These types describe that request and
//! the raw response handed back to the caller.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

#[cfg(test)]
#[path = "contents_tests.rs"]
mod tests;

/// A request to create a single file on the default branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCreateRequest {
    /// Path of the file relative to the repository root
    pub path: String,

    /// Commit message for the creating commit
    pub message: String,

    /// Raw (not yet encoded) file content
    pub content: String,
}

impl FileCreateRequest {
    /// Builds the JSON body expected by the contents API.
    pub fn body(&self) -> FileCreateBody {
        FileCreateBody {
            message: self.message.clone(),
            content: STANDARD.encode(self.content.as_bytes()),
        }
    }
}

/// JSON body of `PUT /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCreateBody {
    pub message: String,

    /// Base64 encoded content
    pub content: String,
}

/// Raw outcome of a file creation call.
///
/// Any status is returned as-is; the caller decides what counts as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCreateResponse {
    pub status: u16,
    pub body: String,
}

impl FileCreateResponse {
    /// Returns true when GitHub answered `201 Created`.
    pub fn is_created(&self) -> bool {
        self.status == http::StatusCode::CREATED.as_u16()
    }
}
