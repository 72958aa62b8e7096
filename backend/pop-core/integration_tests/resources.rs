// Kafka, S3, URL and generic resource operations

use crate::helpers::{mount_detail_error, pair, query_pairs, received, token_client};

use pop_core::Server;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn kafka_topic() -> serde_json::Value {
    json!({
        "dataset_name": "ocean_temps",
        "dataset_title": "Ocean temperatures",
        "owner_org": "ndp",
        "kafka_topic": "ocean.temps",
        "kafka_host": "broker",
        "kafka_port": "9092"
    })
}

#[tokio::test]
async fn given_kafka_topic_when_registering_then_posts_body_to_local_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kafka"))
        .and(query_param("server", "local"))
        .and(body_json(kafka_topic()))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "12345678"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let reply = client.register_kafka_topic(&kafka_topic(), None).await.unwrap();

    assert_eq!(reply, json!({"id": "12345678"}));
}

#[tokio::test]
async fn given_unknown_owner_org_when_registering_kafka_topic_then_rewrites_message() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "POST", "/kafka", 400, "Organization does not exist").await;
    let client = token_client(&server).await;

    let err = client.register_kafka_topic(&kafka_topic(), None).await.unwrap_err();

    assert_eq!(
        err.message(),
        "Error creating Kafka dataset: Organization (owner_org) does not exist"
    );
}

#[tokio::test]
async fn given_missing_dataset_when_updating_kafka_topic_then_reports_not_found() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "PUT", "/kafka/ds-1", 404, "Kafka dataset not found").await;
    let client = token_client(&server).await;

    let err = client
        .update_kafka_topic("ds-1", &json!({"dataset_title": "New"}), None)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Error updating Kafka dataset: Not found");
}

#[tokio::test]
async fn given_update_when_kafka_update_succeeds_then_puts_to_dataset_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/kafka/ds-1"))
        .and(query_param("server", "pre_ckan"))
        .and(body_json(json!({"dataset_title": "New"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Kafka dataset updated successfully"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    client
        .update_kafka_topic("ds-1", &json!({"dataset_title": "New"}), Some(Server::PreCkan))
        .await
        .unwrap();
}

#[tokio::test]
async fn given_s3_link_when_registering_then_posts_to_s3_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/s3"))
        .and(query_param("server", "local"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "s3-1"})))
        .expect(1)
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let reply = client
        .register_s3_link(&json!({"resource_name": "raw", "resource_s3": "s3://bucket/key"}), None)
        .await
        .unwrap();

    assert_eq!(reply["id"], "s3-1");
}

#[tokio::test]
async fn given_reserved_key_when_registering_s3_link_then_reports_conflict() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "POST", "/s3", 400, "Reserved key error: 'name'").await;
    let client = token_client(&server).await;

    let err = client.register_s3_link(&json!({}), None).await.unwrap_err();

    assert_eq!(err.message(), "Error creating S3 resource: Reserved key conflict.");
}

#[tokio::test]
async fn given_other_detail_when_updating_s3_resource_then_passes_through() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "PUT", "/s3/r-9", 400, "Error updating S3 resource").await;
    let client = token_client(&server).await;

    let err = client
        .update_s3_resource("r-9", &json!({}), None)
        .await
        .unwrap_err();

    assert_eq!(
        err.message(),
        "Error updating S3 resource: Error updating S3 resource"
    );
}

#[tokio::test]
async fn given_missing_s3_resource_when_updating_then_reports_not_found() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "PUT", "/s3/r-9", 404, "S3 resource not found").await;
    let client = token_client(&server).await;

    let err = client
        .update_s3_resource("r-9", &json!({}), None)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Error updating S3 resource: Not found");
}

#[tokio::test]
async fn given_duplicate_name_when_registering_url_then_reports_name_exists() {
    let server = MockServer::start().await;
    mount_detail_error(
        &server,
        "POST",
        "/url",
        409,
        "Group name already exists in database",
    )
    .await;
    let client = token_client(&server).await;

    let err = client
        .register_url(&json!({"resource_name": "site"}), Some(Server::PreCkan))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Error creating URL resource: Name already exists.");
    let requests = received(&server).await;
    assert_eq!(query_pairs(&requests[0].url), vec![pair("server", "pre_ckan")]);
}

#[tokio::test]
async fn given_unknown_org_when_registering_url_then_rewrites_message() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "POST", "/url", 400, "Organization does not exist").await;
    let client = token_client(&server).await;

    let err = client.register_url(&json!({}), None).await.unwrap_err();

    assert_eq!(
        err.message(),
        "Error creating URL resource: Organization (owner_org) does not exist."
    );
}

#[tokio::test]
async fn given_missing_url_resource_when_updating_then_reports_not_found() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "PUT", "/url/u-1", 404, "Resource not found").await;
    let client = token_client(&server).await;

    let err = client
        .update_url_resource("u-1", &json!({}), None)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Error updating URL resource: Not found");
}

#[tokio::test]
async fn given_invalid_input_when_updating_url_then_detail_is_kept() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "PUT", "/url/u-1", 400, "Invalid input data").await;
    let client = token_client(&server).await;

    let err = client
        .update_url_resource("u-1", &json!({}), None)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Error updating URL resource: Invalid input data");
}

#[tokio::test]
async fn given_resource_id_when_deleting_then_sends_id_and_server_params() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/resource"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Resource deleted"})))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    client.delete_resource_by_id("example_id", None).await.unwrap();

    let requests = received(&server).await;
    assert_eq!(
        query_pairs(&requests[0].url),
        vec![pair("resource_id", "example_id"), pair("server", "local")]
    );
}

#[tokio::test]
async fn given_missing_resource_when_deleting_by_name_then_reports_not_found() {
    let server = MockServer::start().await;
    mount_detail_error(&server, "DELETE", "/resource/old_resource", 404, "Resource not found").await;
    let client = token_client(&server).await;

    let err = client
        .delete_resource_by_name("old_resource", None)
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Error deleting resource: Not found");
    let requests = received(&server).await;
    assert_eq!(query_pairs(&requests[0].url), vec![pair("server", "local")]);
}

#[tokio::test]
async fn given_no_content_reply_when_deleting_then_returns_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/resource/old_resource"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let reply = client
        .delete_resource_by_name("old_resource", None)
        .await
        .unwrap();

    assert_eq!(reply, serde_json::Value::Null);
}
