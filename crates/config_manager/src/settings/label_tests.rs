//! Tests for label requirements.

use super::*;
use serde_json::json;

#[test]
fn test_label_deserialization() {
    let label: LabelSpec = serde_json::from_value(json!({
        "name": "documentation",
        "color": "0052cc"
    }))
    .expect("Failed to parse");

    assert_eq!(label.name, "documentation");
    assert_eq!(label.color, "0052cc");
    assert!(label.exclude_repos.is_empty());
}

#[test]
fn test_label_without_color_parses_as_invalid() {
    let label: LabelSpec =
        serde_json::from_value(json!({ "name": "bug" })).expect("Failed to parse");

    assert_eq!(label.color, "");
    assert!(!label.has_valid_color());
}

#[test]
fn test_has_valid_color() {
    let mut label = LabelSpec {
        name: "bug".to_string(),
        color: "D73A4A".to_string(),
        exclude_repos: vec![],
    };
    assert!(label.has_valid_color());

    label.color = "#d73a4a".to_string();
    assert!(!label.has_valid_color());

    label.color = "red".to_string();
    assert!(!label.has_valid_color());

    label.color = "zzzzzz".to_string();
    assert!(!label.has_valid_color());
}
