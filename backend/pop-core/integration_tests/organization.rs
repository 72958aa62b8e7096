use crate::helpers::{mount_detail_error, pair, query_pairs, received, token_client};

use pop_core::{PopClientError, Server};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_new_organization_when_registering_then_returns_service_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/organization"))
        .and(body_json(json!({"name": "ndp", "title": "NDP"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": "org-1", "message": "Organization created"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let reply = client
        .register_organization(&json!({"name": "ndp", "title": "NDP"}))
        .await
        .unwrap();

    assert_eq!(reply["id"], "org-1");
}

/// **VALUE**: Duplicate organization names produce the rewritten message.
///
/// **WHY THIS MATTERS**: The service leaks its storage vocabulary ("Group name ... database");
/// callers display this message to users.
#[tokio::test]
async fn given_duplicate_name_when_registering_then_reports_name_exists() {
    let server = MockServer::start().await;
    mount_detail_error(
        &server,
        "POST",
        "/organization",
        400,
        "Group name already exists in database",
    )
    .await;
    let client = token_client(&server).await;

    let err = client
        .register_organization(&json!({"name": "dup"}))
        .await
        .unwrap_err();

    assert!(matches!(err, PopClientError::Remote { .. }));
    assert_eq!(
        err.message(),
        "Error creating organization: Organization name already exists"
    );
    assert_eq!(err.status_code(), Some(400));
}

#[tokio::test]
async fn given_invalid_payload_when_registering_then_detail_passes_through() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "POST", "/organization", 422, "Invalid data provided").await;
    let client = token_client(&server).await;

    let err = client.register_organization(&json!({})).await.unwrap_err();

    assert_eq!(err.message(), "Error creating organization: Invalid data provided");
}

#[tokio::test]
async fn given_no_arguments_when_listing_then_defaults_to_global_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/organization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["org1", "org2", "org3"])))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let orgs = client.list_organizations(None, None).await.unwrap();

    assert_eq!(orgs, json!(["org1", "org2", "org3"]));
    let requests = received(&server).await;
    assert_eq!(query_pairs(&requests[0].url), vec![pair("server", "global")]);
}

#[tokio::test]
async fn given_name_filter_and_server_when_listing_then_both_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/organization"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["filtered_org"])))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    client
        .list_organizations(Some("filtered"), Some(Server::Local))
        .await
        .unwrap();

    let requests = received(&server).await;
    assert_eq!(
        query_pairs(&requests[0].url),
        vec![pair("server", "local"), pair("name", "filtered")]
    );
}

#[tokio::test]
async fn given_server_error_when_listing_then_detail_is_prefixed() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "GET", "/organization", 500, "Server error").await;
    let client = token_client(&server).await;

    let err = client.list_organizations(None, None).await.unwrap_err();

    assert_eq!(err.message(), "Error listing organizations: Server error");
    assert_eq!(err.error_category(), "remote_server");
}

#[tokio::test]
async fn given_name_with_space_when_deleting_then_segment_is_encoded_and_server_is_local() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/organization/my%20org"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Organization deleted successfully"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let reply = client.delete_organization("my org", None).await.unwrap();

    assert_eq!(reply["message"], "Organization deleted successfully");
    let requests = received(&server).await;
    assert_eq!(query_pairs(&requests[0].url), vec![pair("server", "local")]);
}

#[tokio::test]
async fn given_missing_organization_when_deleting_then_reports_not_found() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "DELETE", "/organization/ghost", 404, "Organization not found").await;
    let client = token_client(&server).await;

    let err = client.delete_organization("ghost", None).await.unwrap_err();

    assert_eq!(err.message(), "Error deleting organization: Not found");
}

#[tokio::test]
async fn given_error_without_json_body_when_deleting_then_falls_back_to_transport_text() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/organization/ndp"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let err = client.delete_organization("ndp", None).await.unwrap_err();

    assert!(err.message().starts_with("Error deleting organization: "));
    assert!(err.message().contains("502"), "got '{}'", err.message());
}
