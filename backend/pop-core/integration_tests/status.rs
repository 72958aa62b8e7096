use crate::helpers::{TEST_TOKEN, UNREACHABLE_URL, token_client};

use pop_core::{ClientConfig, PopClient, PopClientError};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_kafka_details(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/status/kafka-details"))
        .respond_with(response)
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_healthy_broker_when_fetching_kafka_details_then_returns_details() {
    let server = MockServer::start().await;
    mount_kafka_details(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "kafka_host": "localhost",
            "kafka_port": 9092,
            "kafka_connection": true
        })),
    )
    .await;
    let client = token_client(&server).await;

    let details = client.get_kafka_details().await.unwrap();

    assert_eq!(details["kafka_host"], "localhost");
    assert_eq!(details["kafka_port"], 9092);
    assert_eq!(details["kafka_connection"], true);
}

#[tokio::test]
async fn given_error_status_when_fetching_kafka_details_then_failed_to_fetch() {
    let server = MockServer::start().await;
    mount_kafka_details(&server, ResponseTemplate::new(500)).await;
    let client = token_client(&server).await;

    let err = client.get_kafka_details().await.unwrap_err();

    assert!(matches!(err, PopClientError::Remote { .. }));
    assert!(err.message().starts_with("Failed to fetch Kafka details:"));
}

/// **VALUE**: Each Kafka-details failure kind keeps its own message prefix.
///
/// **WHY THIS MATTERS**: Operators use the prefix to tell a down broker status endpoint
/// from a proxy returning HTML.
#[tokio::test]
async fn given_non_json_body_when_fetching_kafka_details_then_decode_error() {
    let server = MockServer::start().await;
    mount_kafka_details(&server, ResponseTemplate::new(200).set_body_string("<html>ok</html>")).await;
    let client = token_client(&server).await;

    let err = client.get_kafka_details().await.unwrap_err();

    assert!(matches!(err, PopClientError::Decode { .. }));
    assert!(err
        .message()
        .starts_with("An error occurred while parsing Kafka details:"));
}

#[tokio::test]
async fn given_unreachable_host_when_fetching_kafka_details_then_connectivity_error() {
    let client = PopClient::connect(ClientConfig::new(UNREACHABLE_URL).with_token(TEST_TOKEN))
        .await
        .unwrap();

    let err = client.get_kafka_details().await.unwrap_err();

    assert!(err.is_connectivity());
    assert!(err
        .message()
        .starts_with("An error occurred while fetching Kafka details:"));
}
