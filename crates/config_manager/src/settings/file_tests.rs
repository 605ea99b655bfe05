//! Tests for required file settings.

use super::*;
use serde_json::json;

#[test]
fn test_file_spec_from_bare_path() {
    let file: FileSpec = serde_json::from_value(json!("LICENSE.md")).expect("Failed to parse");

    assert_eq!(file.path, "LICENSE.md");
    assert!(file.template.is_none());
    assert!(file.exclude_repos.is_empty());
}

#[test]
fn test_file_spec_from_object() {
    let file: FileSpec = serde_json::from_value(json!({
        "path": "CODE_OF_CONDUCT.md",
        "template": "templates/coc.md",
        "message": "Add a code of conduct",
        "exclude_repos": ["sandbox"]
    }))
    .expect("Failed to parse");

    assert_eq!(file.path, "CODE_OF_CONDUCT.md");
    assert_eq!(file.template, Some(PathBuf::from("templates/coc.md")));
    assert_eq!(file.commit_message(), "Add a code of conduct");
    assert_eq!(file.exclude_repos, vec!["sandbox".to_string()]);
    assert!(file.content.is_none());
}

#[test]
fn test_license_detection_ignores_case() {
    assert!(FileSpec::new("LICENSE.md").is_license());
    assert!(FileSpec::new("license.MD").is_license());
    assert!(!FileSpec::new("LICENSE").is_license());
    assert!(!FileSpec::new("docs/LICENSE.md").is_license());
}

#[test]
fn test_resolved_content_for_license_uses_builtin_text() {
    let file = FileSpec::new("LICENSE.md");
    assert_eq!(file.resolved_content(), Some(LICENSE_TEXT));
}

#[test]
fn test_resolved_content_prefers_template() {
    let mut file = FileSpec::new("LICENSE.md");
    file.content = Some("Apache-2.0".to_string());
    assert_eq!(file.resolved_content(), Some("Apache-2.0"));
}

#[test]
fn test_resolved_content_missing_for_other_files() {
    assert!(FileSpec::new("README.md").resolved_content().is_none());
}

#[test]
fn test_default_commit_message() {
    assert_eq!(FileSpec::new("LICENSE.md").commit_message(), "Add LICENSE.md");
}
