use super::*;

#[test]
fn test_auth_error_display() {
    let error = Error::Auth("Invalid token".to_string());
    assert_eq!(error.to_string(), "Authentication error: Invalid token");
}

#[test]
fn test_config_error_from_missing_file() {
    let error: Error = ConfigurationError::FileNotFound {
        path: "./kantoku.cfg".to_string(),
    }
    .into();

    assert!(matches!(error, Error::Config(_)));
    assert!(error.to_string().contains("./kantoku.cfg"));
}

#[test]
fn test_client_error_becomes_auth_error() {
    let error: Error = github_client::Error::AuthError("bad base url".to_string()).into();
    assert!(matches!(error, Error::Auth(_)));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
