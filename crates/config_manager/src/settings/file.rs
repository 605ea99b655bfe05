//! Required file settings.
//!
//! A required file is written either from a local template or, for
//! `LICENSE.md`, from the built-in license text.

use std::path::PathBuf;

use serde::Deserialize;

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;

/// File name that receives the built-in license text when no template is given.
pub const LICENSE_FILE_NAME: &str = "license.md";

/// License text written to `LICENSE.md` when no template is configured.
pub const LICENSE_TEXT: &str = "The MIT License (MIT)

Copyright (c) the project authors

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the \"Software\"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
THE SOFTWARE.
";

/// A file every repository of the organization must contain.
///
/// Deserializes from either a bare path (`"LICENSE.md"`) or an object:
///
/// ```json
/// { "path": "CODE_OF_CONDUCT.md", "template": "templates/coc.md", "exclude_repos": ["sandbox"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "FileSpecRepr")]
pub struct FileSpec {
    /// Path relative to the repository root; the identity key
    pub path: String,

    /// Local template providing the content, relative to the configuration file
    pub template: Option<PathBuf>,

    /// Commit message used when the file is created
    pub message: Option<String>,

    /// Repositories that are not required to contain this file
    pub exclude_repos: Vec<String>,

    /// Template content, filled in when the configuration is loaded
    pub content: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FileSpecRepr {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        template: Option<PathBuf>,
        #[serde(default)]
        message: Option<String>,
        #[serde(default)]
        exclude_repos: Vec<String>,
    },
}

impl From<FileSpecRepr> for FileSpec {
    fn from(value: FileSpecRepr) -> Self {
        match value {
            FileSpecRepr::Path(path) => Self::new(&path),
            FileSpecRepr::Detailed {
                path,
                template,
                message,
                exclude_repos,
            } => Self {
                path,
                template,
                message,
                exclude_repos,
                content: None,
            },
        }
    }
}

impl FileSpec {
    /// Creates a requirement for a path with no template.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            template: None,
            message: None,
            exclude_repos: Vec::new(),
            content: None,
        }
    }

    /// Returns true if the path names the license file, ignoring case.
    pub fn is_license(&self) -> bool {
        self.path.eq_ignore_ascii_case(LICENSE_FILE_NAME)
    }

    /// Returns the content to write when the file is missing.
    ///
    /// Template content wins; a license file without template falls back to
    /// [`LICENSE_TEXT`]. Any other file without template has no content.
    pub fn resolved_content(&self) -> Option<&str> {
        match (&self.content, self.is_license()) {
            (Some(content), _) => Some(content.as_str()),
            (None, true) => Some(LICENSE_TEXT),
            (None, false) => None,
        }
    }

    /// Returns the commit message for creating the file.
    pub fn commit_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("Add {}", self.path))
    }
}
