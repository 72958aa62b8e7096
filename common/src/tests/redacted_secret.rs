use crate::RedactedSecret;

/// **VALUE**: Verifies that bearer tokens never appear in Debug or Display output.
///
/// **WHY THIS MATTERS**: The client config and the client itself derive `Debug`; a
/// leaked token in a log line is a credential leak.
///
/// **BUG THIS CATCHES**: Would catch a derived `Debug` replacing the manual impl.
#[test]
fn given_secret_when_formatted_then_value_is_hidden() {
    let secret = RedactedSecret::new("super-secret-token");

    let debug = format!("{secret:?}");
    let display = format!("{secret}");

    assert!(!debug.contains("super-secret-token"));
    assert!(!display.contains("super-secret-token"));
    assert_eq!(secret.expose(), "super-secret-token");
}

#[test]
fn given_secret_when_serialized_then_refuses() {
    let secret = RedactedSecret::from("token");

    let result = serde_json::to_string(&secret);

    let err = result.expect_err("serialization must be refused");
    assert!(err.to_string().contains("cannot be serialized"));
}

#[test]
fn given_json_string_when_deserialized_then_wraps_value() {
    let secret: RedactedSecret = serde_json::from_str("\"from-config\"").unwrap();

    assert_eq!(secret.expose(), "from-config");
    assert!(!secret.is_empty());
}
