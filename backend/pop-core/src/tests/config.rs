// Unit tests for ClientConfig: auth resolution, validation, TOML and env loading

use crate::config::{
    Authentication, ClientConfig, ENV_BASE_URL, ENV_PASSWORD, ENV_TIMEOUT_SECS, ENV_TOKEN,
    ENV_USERNAME,
};
use crate::error::config::ConfigError;

use std::time::Duration;

use serial_test::serial;

/// **VALUE**: Verifies that a token combined with credentials is rejected.
///
/// **WHY THIS MATTERS**: With both present it is ambiguous which identity the caller
/// meant; silently picking one could write to the catalog as the wrong user.
#[test]
fn given_token_and_credentials_when_resolving_auth_then_validation_error() {
    let config = ClientConfig::new("api.example.com")
        .with_token("abc")
        .with_credentials("user", "pass");

    let err = config.auth().unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.reason().contains("not both"));
}

#[test]
fn given_token_and_only_password_when_resolving_auth_then_validation_error() {
    let config = ClientConfig::new("api.example.com")
        .with_token("abc")
        .with_password("pass");

    assert!(config.auth().is_err());
}

#[test]
fn given_only_username_when_resolving_auth_then_requires_both() {
    let username_only = ClientConfig::new("api.example.com").with_username("user");
    let password_only = ClientConfig::new("api.example.com").with_password("pass");

    let err = username_only.auth().unwrap_err();
    assert!(err.reason().contains("must be provided together"));
    assert!(password_only.auth().is_err());
}

#[test]
fn given_each_valid_combination_when_resolving_auth_then_mode_matches() {
    let token = ClientConfig::new("h").with_token("abc");
    let credentials = ClientConfig::new("h").with_credentials("user", "pass");
    let anonymous = ClientConfig::new("h");

    assert!(matches!(token.auth().unwrap(), Authentication::Token(t) if t.expose() == "abc"));
    assert!(matches!(
        credentials.auth().unwrap(),
        Authentication::Credentials { username: "user", .. }
    ));
    assert_eq!(anonymous.auth().unwrap().mode(), "anonymous");
}

#[test]
fn given_empty_token_when_resolving_auth_then_treated_as_absent() {
    let config = ClientConfig::new("h").with_token("");

    assert_eq!(config.auth().unwrap().mode(), "anonymous");
}

#[test]
fn given_empty_base_url_or_tiny_timeout_when_validating_then_fails() {
    let empty = ClientConfig::new("  ");
    let fast = ClientConfig::new("h").with_timeout(Duration::from_millis(5));

    assert!(empty.validate().is_err());
    assert!(fast.validate().is_err());
    assert!(ClientConfig::new("h").validate().is_ok());
}

#[test]
fn given_config_with_password_when_debug_printed_then_secret_is_hidden() {
    let config = ClientConfig::new("h").with_credentials("user", "hunter2");

    assert!(!format!("{config:?}").contains("hunter2"));
}

#[test]
fn given_toml_file_when_loaded_then_fields_and_defaults_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pop.toml");
    std::fs::write(
        &path,
        "base_url = \"catalog.example.org\"\nusername = \"alice\"\npassword = \"s3cret\"\ntimeout_secs = 5\n",
    )
    .unwrap();

    let config = ClientConfig::load(&path).unwrap();

    assert_eq!(config.base_url, "catalog.example.org");
    assert_eq!(config.username.as_deref(), Some("alice"));
    assert_eq!(config.password.as_ref().map(|p| p.expose()), Some("s3cret"));
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert!(config.user_agent.starts_with("pop-core/"));
}

#[test]
fn given_toml_with_conflicting_auth_when_loaded_then_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pop.toml");
    std::fs::write(&path, "base_url = \"h\"\ntoken = \"t\"\nusername = \"u\"\n").unwrap();

    let err = ClientConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn given_missing_or_malformed_file_when_loaded_then_read_or_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let malformed = dir.path().join("bad.toml");
    std::fs::write(&malformed, "base_url = ").unwrap();

    assert!(matches!(
        ClientConfig::load(&missing).unwrap_err(),
        ConfigError::ReadError { .. }
    ));
    assert!(matches!(
        ClientConfig::load(&malformed).unwrap_err(),
        ConfigError::ParseError { .. }
    ));
}

fn clear_env() {
    for variable in [ENV_BASE_URL, ENV_TOKEN, ENV_USERNAME, ENV_PASSWORD, ENV_TIMEOUT_SECS] {
        // SAFETY: env tests are serialized with #[serial]
        unsafe { std::env::remove_var(variable) };
    }
}

fn set_env(variable: &str, value: &str) {
    // SAFETY: env tests are serialized with #[serial]
    unsafe { std::env::set_var(variable, value) };
}

#[test]
#[serial]
fn given_env_variables_when_loading_from_env_then_config_is_populated() {
    clear_env();
    set_env(ENV_BASE_URL, "https://catalog.example.org");
    set_env(ENV_TOKEN, "env-token");
    set_env(ENV_TIMEOUT_SECS, "12");

    let config = ClientConfig::from_env().unwrap();

    assert_eq!(config.base_url, "https://catalog.example.org");
    assert_eq!(config.token.as_ref().map(|t| t.expose()), Some("env-token"));
    assert_eq!(config.timeout, Duration::from_secs(12));
    clear_env();
}

#[test]
#[serial]
fn given_no_base_url_when_loading_from_env_then_environment_error() {
    clear_env();

    let err = ClientConfig::from_env().unwrap_err();

    assert!(matches!(
        err,
        ConfigError::EnvironmentError { variable: ENV_BASE_URL, .. }
    ));
}

#[test]
#[serial]
fn given_non_numeric_timeout_when_loading_from_env_then_environment_error() {
    clear_env();
    set_env(ENV_BASE_URL, "h");
    set_env(ENV_TIMEOUT_SECS, "soon");

    let err = ClientConfig::from_env().unwrap_err();

    assert!(err.reason().contains("soon"));
    clear_env();
}
