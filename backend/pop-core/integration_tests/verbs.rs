use crate::helpers::{pair, query_pairs, received, token_client};

use pop_core::{PopClientError, QueryParams};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_get_when_successful_then_decodes_json_and_sends_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .and(header("authorization", "Bearer test-token-12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"healthy": true})))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let params = QueryParams::new().with("verbose", "1").with_each("tag", ["a", "b"]);
    let body = client.get("/status", &params).await.unwrap();

    assert_eq!(body, json!({"healthy": true}));
    let requests = received(&server).await;
    assert_eq!(
        query_pairs(&requests[0].url),
        vec![pair("verbose", "1"), pair("tag", "a"), pair("tag", "b")]
    );
}

/// **VALUE**: Verifies the bare verbs do not normalize error bodies.
///
/// **WHY THIS MATTERS**: Callers using the primitives rely on the transport's status
/// error; only resource operations rewrite `detail` into prefixed messages.
#[tokio::test]
async fn given_get_when_not_found_then_returns_unnormalized_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Thing not found"})))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let err = client.get("/missing", &QueryParams::new()).await.unwrap_err();

    assert!(matches!(err, PopClientError::Http { .. }));
    assert_eq!(err.status_code(), Some(404));
    assert!(!err.message().contains("Thing not found"));
}

#[tokio::test]
async fn given_post_when_successful_then_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .and(body_json(json!({"name": "x"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "1"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let body = client.post("/echo", &json!({"name": "x"})).await.unwrap();

    assert_eq!(body, json!({"id": "1"}));
}

#[tokio::test]
async fn given_post_when_server_fails_then_http_error_carries_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/echo"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let err = client.post("/echo", &json!({})).await.unwrap_err();

    assert_eq!(err.status_code(), Some(500));
}

/// **VALUE**: `delete` returns the status code, not a decoded body.
///
/// **WHY THIS MATTERS**: Many DELETE handlers answer 204 with no body; decoding it would fail.
#[tokio::test]
async fn given_delete_when_successful_then_returns_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/organization/old"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let status = client.delete("/organization/old").await.unwrap();

    assert_eq!(status, 204);
}

#[tokio::test]
async fn given_delete_when_forbidden_then_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/organization/old"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let err = client.delete("/organization/old").await.unwrap_err();

    assert!(matches!(err, PopClientError::Http { .. }));
    assert_eq!(err.status_code(), Some(403));
}
