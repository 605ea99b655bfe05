use super::*;

#[test]
fn test_required_config_missing_display() {
    let err = ConfigurationError::RequiredConfigMissing {
        key: "auth_token".to_string(),
    };
    assert_eq!(err.to_string(), "Required configuration missing: auth_token");
}

#[test]
fn test_validation_failed_display_counts_errors() {
    let err = ConfigurationError::ValidationFailed {
        error_count: 2,
        errors: vec![
            ValidationError::new("orgs[0].org", "Organization name is empty"),
            ValidationError::new("orgs[0].labels[1].color", "Not a hex colour"),
        ],
    };
    assert_eq!(
        err.to_string(),
        "Configuration validation failed with 2 error(s)"
    );
}
