//! GitHub label requirement.

use serde::Deserialize;

#[cfg(test)]
#[path = "label_tests.rs"]
mod tests;

/// A label every repository of the organization must define.
///
/// The identity of a label is its exact name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelSpec {
    /// Label name.
    pub name: String,

    /// Label color (hex code without #). Left empty when absent so that
    /// validation can report the field.
    #[serde(default)]
    pub color: String,

    /// Repositories that are not required to define this label.
    #[serde(default)]
    pub exclude_repos: Vec<String>,
}

impl LabelSpec {
    /// Returns true if the colour is six hexadecimal digits.
    pub fn has_valid_color(&self) -> bool {
        self.color.len() == 6 && self.color.chars().all(|c| c.is_ascii_hexdigit())
    }
}
