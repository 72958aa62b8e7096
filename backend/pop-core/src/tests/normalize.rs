// Unit tests for base URL normalization and detail extraction

use crate::error::pop_client::PopClientError;
use crate::pop_client::{extract_detail, normalize_base_url};

/// **VALUE**: Verifies that scheme-less hosts get `http://` prepended.
///
/// **WHY THIS MATTERS**: Users routinely pass `catalog.example.org` or `localhost:8001`;
/// without a scheme every request URL would fail to parse.
///
/// **BUG THIS CATCHES**: Would catch scheme detection treating `localhost:8001` as a
/// URL with scheme `localhost`.
#[test]
fn given_url_without_scheme_when_normalized_then_http_is_prepended() {
    assert_eq!(
        normalize_base_url("api.example.com").unwrap(),
        "http://api.example.com"
    );
    assert_eq!(
        normalize_base_url("localhost:8001").unwrap(),
        "http://localhost:8001"
    );
}

#[test]
fn given_url_with_scheme_when_normalized_then_only_trailing_slash_is_removed() {
    assert_eq!(
        normalize_base_url("https://api.example.com/").unwrap(),
        "https://api.example.com"
    );
    assert_eq!(
        normalize_base_url("http://api.example.com").unwrap(),
        "http://api.example.com"
    );
    assert_eq!(
        normalize_base_url("http://api.example.com/catalog//").unwrap(),
        "http://api.example.com/catalog"
    );
}

#[test]
fn given_unparseable_url_when_normalized_then_returns_url_parse_error() {
    let err = normalize_base_url("http://exa mple.com").unwrap_err();

    assert!(matches!(err, PopClientError::UrlParse { .. }));
}

#[test]
fn given_error_body_with_detail_when_extracted_then_returns_detail_text() {
    let detail = extract_detail(r#"{"detail": "Organization not found"}"#);

    assert_eq!(detail.as_deref(), Some("Organization not found"));
}

/// **VALUE**: Verifies fallbacks when the body has no usable `detail`.
///
/// **WHY THIS MATTERS**: Proxies return HTML error pages and validation errors return
/// structured details; neither may panic or produce an empty message.
#[test]
fn given_body_without_string_detail_when_extracted_then_falls_back_sensibly() {
    assert_eq!(extract_detail("<html>502 Bad Gateway</html>"), None);
    assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
    assert_eq!(extract_detail(r#"{"detail": null}"#), None);
    assert_eq!(
        extract_detail(r#"{"detail": [{"loc": ["body", "name"]}]}"#).as_deref(),
        Some(r#"[{"loc":["body","name"]}]"#)
    );
}
