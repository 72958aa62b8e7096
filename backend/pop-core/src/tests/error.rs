// Unit tests for PopClientError formatting and accessors

use crate::error::config::ConfigError;
use crate::error::pop_client::PopClientError;

/// **VALUE**: Verifies the display form carries kind, message and location.
///
/// **WHY THIS MATTERS**: Logs only see `Display`; the location tells which operation
/// produced the error, the message tells the user what went wrong.
#[test]
fn given_remote_error_when_formatted_then_includes_message_and_location() {
    let err = PopClientError::remote("Error deleting resource: Not found", 404u16);

    let formatted = err.to_string();

    assert!(formatted.starts_with("Remote Error: Error deleting resource: Not found"));
    assert!(formatted.contains("error.rs"));
    assert_eq!(err.message(), "Error deleting resource: Not found");
    assert_eq!(err.status_code(), Some(404));
}

#[test]
fn given_config_error_when_wrapped_then_message_is_reason() {
    let err: PopClientError = ConfigError::validation("base_url cannot be empty").into();

    assert_eq!(err.message(), "base_url cannot be empty");
    assert_eq!(err.error_category(), "configuration");
    assert_eq!(err.status_code(), None);
}

#[test]
fn given_error_kinds_when_categorized_then_categories_are_distinct() {
    let precondition = PopClientError::precondition("terms/keys mismatch");
    let auth = PopClientError::authentication("Authentication failed: Invalid username or password.");
    let server_side = PopClientError::remote("Error listing organizations: boom", 503u16);
    let client_side = PopClientError::remote("Error listing organizations: bad", 422u16);
    let unavailable = PopClientError::unavailable("availability check failed", 500u16);

    assert_eq!(precondition.error_category(), "precondition");
    assert_eq!(auth.error_category(), "authentication");
    assert_eq!(server_side.error_category(), "remote_server");
    assert_eq!(client_side.error_category(), "remote");
    assert_eq!(unavailable.error_category(), "unavailable");
    assert!(!unavailable.is_connectivity());
}

#[test]
fn given_bad_json_when_converted_then_decode_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();

    let err = PopClientError::from(json_err);

    assert!(matches!(err, PopClientError::Decode { .. }));
}
