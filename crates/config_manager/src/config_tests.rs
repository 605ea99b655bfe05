use super::*;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("kantoku.cfg");
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn test_load_nonexistent_file() {
    let result =
        KantokuConfig::load_with_token_override(Path::new("does-not-exist/kantoku.cfg"), None);

    assert!(matches!(
        result,
        Err(ConfigurationError::FileNotFound { .. })
    ));
}

#[test]
fn test_load_invalid_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&temp_dir, "{ not json");

    let result = KantokuConfig::load_with_token_override(&path, None);
    assert!(matches!(result, Err(ConfigurationError::ParseError { .. })));
}

#[test]
fn test_load_without_auth_token() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&temp_dir, r#"{ "orgs": [] }"#);

    let result = KantokuConfig::load_with_token_override(&path, None);
    match result {
        Err(ConfigurationError::RequiredConfigMissing { key }) => assert_eq!(key, "auth_token"),
        other => panic!("Expected RequiredConfigMissing, got {:?}", other),
    }
}

#[test]
fn test_load_with_empty_auth_token() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&temp_dir, r#"{ "auth_token": "  " }"#);

    let result = KantokuConfig::load_with_token_override(&path, None);
    assert!(matches!(
        result,
        Err(ConfigurationError::RequiredConfigMissing { .. })
    ));
}

#[test]
fn test_token_override_replaces_missing_token() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(&temp_dir, r#"{ "orgs": [] }"#);

    let config = KantokuConfig::load_with_token_override(&path, Some("from-env".to_string()))
        .expect("Failed to load config");
    assert_eq!(
        config
            .auth_token
            .as_ref()
            .map(|t| t.expose_secret().to_string()),
        Some("from-env".to_string())
    );
}

#[test]
fn test_load_minimal_config_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(
        &temp_dir,
        r#"{ "auth_token": "abc", "orgs": [ { "org": "AmpersandJS" } ] }"#,
    );

    let config = KantokuConfig::load_with_token_override(&path, None).expect("Failed to load");

    assert!(config.has_auth_token());
    assert_eq!(config.orgs.len(), 1);
    assert!(config.orgs[0].hooks.is_empty());
    assert!(config.api_base_url.is_none());
    assert!(!config.strict_file_checks);
    assert_eq!(
        config.request_timeout(),
        Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
    );
}

#[test]
fn test_load_full_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(
        &temp_dir,
        r#"{
            "auth_token": "abc",
            "api_base_url": "https://github.example.com/api/v3",
            "request_timeout_secs": 5,
            "strict_file_checks": true,
            "orgs": [
                {
                    "org": "AmpersandJS",
                    "exclude_repos": ["ubersicht"],
                    "hooks": [{ "url": "http://127.0.0.1:4242/github/callback", "events": ["*"], "exclude_repos": [] }],
                    "services": [{ "name": "campfire", "token": "t", "user": "u", "domain": "d", "events": ["push"], "exclude_repos": [] }],
                    "labels": [{ "name": "bug", "color": "fc2929" }],
                    "files": ["LICENSE.md"]
                }
            ]
        }"#,
    );

    let config = KantokuConfig::load_with_token_override(&path, None).expect("Failed to load");

    assert_eq!(
        config.api_base_url.as_deref(),
        Some("https://github.example.com/api/v3")
    );
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
    assert!(config.strict_file_checks);

    let org = &config.orgs[0];
    assert_eq!(org.exclude_repos, vec!["ubersicht".to_string()]);
    assert_eq!(org.hooks[0].events, vec!["*".to_string()]);
    assert_eq!(org.services[0].name, "campfire");
    assert_eq!(org.labels[0].color, "fc2929");
    assert!(org.files[0].is_license());
}

#[test]
fn test_load_reads_templates_relative_to_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    fs::create_dir(temp_dir.path().join("templates")).expect("Failed to create dir");
    fs::write(
        temp_dir.path().join("templates/coc.md"),
        "Be excellent to each other.",
    )
    .expect("Failed to write template");

    let path = write_config(
        &temp_dir,
        r#"{
            "auth_token": "abc",
            "orgs": [ { "org": "bear", "files": [ { "path": "CODE_OF_CONDUCT.md", "template": "templates/coc.md" } ] } ]
        }"#,
    );

    let config = KantokuConfig::load_with_token_override(&path, None).expect("Failed to load");
    assert_eq!(
        config.orgs[0].files[0].resolved_content(),
        Some("Be excellent to each other.")
    );
}

#[test]
fn test_load_with_missing_template() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_config(
        &temp_dir,
        r#"{
            "auth_token": "abc",
            "orgs": [ { "org": "bear", "files": [ { "path": "README.md", "template": "missing.md" } ] } ]
        }"#,
    );

    let result = KantokuConfig::load_with_token_override(&path, None);
    assert!(matches!(
        result,
        Err(ConfigurationError::FileAccessError { .. })
    ));
}

#[test]
fn test_auth_token_is_redacted_in_debug_output() {
    let config = KantokuConfig::from_json_str(r#"{ "auth_token": "super-secret" }"#, Path::new("."))
        .expect("Failed to parse");

    let debug = format!("{:?}", config);
    assert!(!debug.contains("super-secret"));
}
