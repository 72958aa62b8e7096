use crate::helpers::{TEST_TOKEN, UNREACHABLE_URL, received, token_client};

use pop_core::{ClientConfig, PopClient, PopClientError};

use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_token_response(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string("username=user&password=pass"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// **VALUE**: Verifies that a token-configured client sends nothing during construction.
///
/// **WHY THIS MATTERS**: Token clients are built in hot paths (per job, per request);
/// a hidden availability check would double the load on the catalog.
#[tokio::test]
async fn given_token_when_connecting_then_sets_bearer_header_without_network() {
    let server = MockServer::start().await;

    let client = token_client(&server).await;

    assert_eq!(client.token(), Some(TEST_TOKEN));
    assert_eq!(
        client.authorization_header().as_deref(),
        Some("Bearer test-token-12345")
    );
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn given_token_and_credentials_when_connecting_then_config_error_before_network() {
    let server = MockServer::start().await;
    let config = ClientConfig::new(server.uri())
        .with_token("abc")
        .with_credentials("user", "pass");

    let err = PopClient::connect(config).await.unwrap_err();

    assert!(matches!(err, PopClientError::Config(_)));
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn given_username_without_password_when_connecting_then_config_error() {
    let server = MockServer::start().await;
    let config = ClientConfig::new(server.uri()).with_username("user");

    let err = PopClient::connect(config).await.unwrap_err();

    assert!(matches!(err, PopClientError::Config(_)));
    assert!(err.message().contains("must be provided together"));
    assert!(received(&server).await.is_empty());
}

/// **VALUE**: End-to-end happy path for credential exchange.
///
/// **WHY THIS MATTERS**: The token must not only be stored but actually sent on later
/// calls; otherwise every resource operation fails with 401.
#[tokio::test]
async fn given_credentials_when_exchange_succeeds_then_token_is_used_on_later_calls() {
    let server = MockServer::start().await;
    mount_token_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"access_token": "T", "token_type": "bearer"})),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/organization"))
        .and(header("authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["org1"])))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri()).with_credentials("user", "pass");
    let client = PopClient::connect(config).await.unwrap();

    assert_eq!(client.token(), Some("T"));
    assert_eq!(client.authorization_header().as_deref(), Some("Bearer T"));

    let orgs = client.list_organizations(None, None).await.unwrap();
    assert_eq!(orgs, json!(["org1"]));
}

#[tokio::test]
async fn given_exchange_without_access_token_when_connecting_then_authentication_error() {
    let server = MockServer::start().await;
    mount_token_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"token": "fake-token"})),
    )
    .await;

    let config = ClientConfig::new(server.uri()).with_credentials("user", "pass");
    let err = PopClient::connect(config).await.unwrap_err();

    assert!(matches!(err, PopClientError::Authentication { .. }));
    assert_eq!(err.message(), "Authentication failed: No access token received.");
}

/// **VALUE**: A 2xx token reply without a usable string `access_token` is an
/// authentication failure, whatever shape the body has.
///
/// **WHY THIS MATTERS**: Callers branch on the error kind; a proxy page or a malformed
/// reply must not look like a client-side decode bug.
#[tokio::test]
async fn given_unusable_token_replies_when_connecting_then_authentication_error() {
    let replies = [
        ResponseTemplate::new(200).set_body_json(json!({"access_token": 123})),
        ResponseTemplate::new(200).set_body_json(json!([])),
        ResponseTemplate::new(200).set_body_string("<html>login</html>"),
        ResponseTemplate::new(200).set_body_json(json!({"access_token": ""})),
    ];

    for reply in replies {
        let server = MockServer::start().await;
        mount_token_response(&server, reply).await;

        let config = ClientConfig::new(server.uri()).with_credentials("user", "pass");
        let err = PopClient::connect(config).await.unwrap_err();

        assert_eq!(err.error_category(), "authentication");
        assert_eq!(err.message(), "Authentication failed: No access token received.");
    }
}

#[tokio::test]
async fn given_rejected_credentials_when_connecting_then_authentication_error() {
    let server = MockServer::start().await;
    mount_token_response(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({"detail": "Incorrect username or password"})),
    )
    .await;

    let config = ClientConfig::new(server.uri()).with_credentials("user", "pass");
    let err = PopClient::connect(config).await.unwrap_err();

    assert!(matches!(err, PopClientError::Authentication { .. }));
    assert!(err.message().contains("Invalid username or password"));
}

#[tokio::test]
async fn given_token_endpoint_server_error_when_connecting_then_http_error_with_status() {
    let server = MockServer::start().await;
    mount_token_response(&server, ResponseTemplate::new(500)).await;

    let config = ClientConfig::new(server.uri()).with_credentials("user", "pass");
    let err = PopClient::connect(config).await.unwrap_err();

    assert!(matches!(err, PopClientError::Http { .. }));
    assert!(err.message().starts_with("HTTP error occurred"));
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn given_unreachable_host_when_exchanging_credentials_then_connectivity_error() {
    let config = ClientConfig::new(UNREACHABLE_URL).with_credentials("user", "pass");

    let err = PopClient::connect(config).await.unwrap_err();

    assert!(err.is_connectivity(), "unexpected error: {err}");
    assert!(err.message().contains("Failed to connect to the API at http://127.0.0.1:1"));
}

#[tokio::test]
async fn given_failed_refresh_when_getting_token_then_previous_token_is_kept() {
    let server = MockServer::start().await;
    mount_token_response(&server, ResponseTemplate::new(401)).await;
    let mut client = token_client(&server).await;

    let result = client.get_token("user", "pass").await;

    assert!(result.is_err());
    assert_eq!(client.token(), Some(TEST_TOKEN));
}

#[tokio::test]
async fn given_refresh_when_getting_token_then_token_is_replaced() {
    let server = MockServer::start().await;
    mount_token_response(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"access_token": "fresh"})),
    )
    .await;
    let mut client = token_client(&server).await;

    client.get_token("user", "pass").await.unwrap();

    assert_eq!(client.authorization_header().as_deref(), Some("Bearer fresh"));
}

/// **VALUE**: Scheme-less base URL plus a healthy availability check yields an `http://` client.
#[tokio::test]
async fn given_no_credentials_and_healthy_service_when_connecting_then_availability_check_succeeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;
    let without_scheme = server.uri().trim_start_matches("http://").to_string();

    let client = PopClient::new(&format!("{without_scheme}/")).await.unwrap();

    assert_eq!(client.base_url(), server.uri());
    assert!(client.base_url().starts_with("http://"));
    assert_eq!(client.token(), None);
    assert_eq!(client.authorization_header(), None);
}

#[tokio::test]
async fn given_no_credentials_and_failing_service_when_connecting_then_unavailable_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = PopClient::new(&server.uri()).await.unwrap_err();

    assert!(matches!(err, PopClientError::Unavailable { .. }));
    assert!(err.message().contains("status code 503"));
    assert!(!err.is_connectivity());
}

#[tokio::test]
async fn given_no_credentials_and_unreachable_host_when_connecting_then_connectivity_error() {
    let err = PopClient::new(UNREACHABLE_URL).await.unwrap_err();

    match err {
        PopClientError::Connectivity { is_connection, message, .. } => {
            assert!(is_connection);
            assert!(message.contains("Please check if the URL is correct and reachable"));
        }
        other => panic!("expected connectivity error, got {other}"),
    }
}
