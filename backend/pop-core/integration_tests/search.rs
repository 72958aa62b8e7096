use crate::helpers::{pair, query_pairs, received, token_client};

use pop_core::{PopClientError, SearchFilters, Server};

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_search_results(server: &MockServer, verb: &str) {
    Mock::given(method(verb))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "12345678-abcd", "name": "example_dataset_name", "owner_org": "example_org_name"}
        ])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_terms_when_searching_then_terms_repeat_and_server_defaults_to_global() {
    let server = MockServer::start().await;
    mount_search_results(&server, "GET").await;
    let client = token_client(&server).await;

    let results = client
        .search_datasets(&["example", "dataset"], None, None)
        .await
        .unwrap();

    assert_eq!(results[0]["name"], "example_dataset_name");
    let requests = received(&server).await;
    assert_eq!(
        query_pairs(&requests[0].url),
        vec![
            pair("terms", "example"),
            pair("terms", "dataset"),
            pair("server", "global"),
        ]
    );
}

#[tokio::test]
async fn given_keys_when_searching_then_keys_follow_terms() {
    let server = MockServer::start().await;
    mount_search_results(&server, "GET").await;
    let client = token_client(&server).await;

    client
        .search_datasets(
            &["example", "dataset"],
            Some(&[Some("description"), Some("extras.key1")][..]),
            Some(Server::Local),
        )
        .await
        .unwrap();

    let requests = received(&server).await;
    assert_eq!(
        query_pairs(&requests[0].url),
        vec![
            pair("terms", "example"),
            pair("terms", "dataset"),
            pair("keys", "description"),
            pair("keys", "extras.key1"),
            pair("server", "local"),
        ]
    );
}

/// **VALUE**: A `None` key is sent as the literal `null`, not dropped.
///
/// **WHY THIS MATTERS**: Keys pair with terms by position; dropping one would shift every
/// later key onto the wrong term.
#[tokio::test]
async fn given_none_key_when_searching_then_sends_literal_null() {
    let server = MockServer::start().await;
    mount_search_results(&server, "GET").await;
    let client = token_client(&server).await;

    client.search_datasets(&["a"], Some(&[None::<&str>][..]), None).await.unwrap();

    let requests = received(&server).await;
    let pairs = query_pairs(&requests[0].url);
    assert!(pairs.contains(&pair("keys", "null")));
}

#[tokio::test]
async fn given_mismatched_terms_and_keys_when_searching_then_fails_without_request() {
    let server = MockServer::start().await;
    let client = token_client(&server).await;

    let err = client
        .search_datasets(&["a", "b"], Some(&[Some("x")][..]), None)
        .await
        .unwrap_err();

    assert!(matches!(err, PopClientError::Precondition { .. }));
    assert!(err
        .message()
        .contains("The number of terms must match the number of keys"));
    assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn given_search_failure_when_searching_then_detail_is_prefixed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "Error occurred"})))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let err = client.search_datasets(&["error_term"], None, None).await.unwrap_err();

    assert_eq!(err.message(), "Error searching for datasets: Error occurred");
}

#[tokio::test]
async fn given_partial_filters_when_searching_then_query_shape_is_fixed() {
    let server = MockServer::start().await;
    mount_search_results(&server, "GET").await;
    let client = token_client(&server).await;
    let filters = SearchFilters {
        dataset_name: Some("ocean".to_string()),
        ..SearchFilters::default()
    };

    client.search(&filters).await.unwrap();

    let requests = received(&server).await;
    let pairs = query_pairs(&requests[0].url);
    assert_eq!(pairs.len(), 12);
    assert_eq!(pairs[0], pair("dataset_name", "ocean"));
    assert!(pairs.contains(&pair("owner_org", "")));
    assert!(pairs.contains(&pair("filter_list", "")));
    assert_eq!(pairs[11], pair("server", "global"));
}

#[tokio::test]
async fn given_filter_object_when_advanced_searching_then_posts_it_as_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({"search_term": "ocean", "server": "local"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let client = token_client(&server).await;
    let filters = SearchFilters {
        search_term: Some("ocean".to_string()),
        server: Some(Server::Local),
        ..SearchFilters::default()
    };

    let results = client.advanced_search(&filters).await.unwrap();

    assert_eq!(results, json!([]));
}

#[tokio::test]
async fn given_advanced_search_failure_when_posting_then_detail_is_prefixed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"detail": "bad filter"})))
        .mount(&server)
        .await;
    let client = token_client(&server).await;

    let err = client.advanced_search(&json!({"bogus": 1})).await.unwrap_err();

    assert_eq!(err.message(), "Error performing advanced search: bad filter");
}
