//! Test helpers for pop-core integration tests.
//!
//! Every test runs against its own `wiremock` server. Clients built here use a
//! token so construction sends no request and the mock only sees the calls
//! under test.

use pop_core::{ClientConfig, PopClient};

use url::Url;
use wiremock::MockServer;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token-12345";

/// An address nothing listens on.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub async fn token_client(server: &MockServer) -> PopClient {
    PopClient::connect(ClientConfig::new(server.uri()).with_token(TEST_TOKEN))
        .await
        .expect("token client construction never touches the network")
}

/// Mount a handler for `verb path` answering `status` with a JSON `{"detail": ...}` body.
pub async fn mount_detail_error(server: &MockServer, verb: &str, route: &str, status: u16, detail: &str) {
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(serde_json::json!({ "detail": detail })),
        )
        .mount(server)
        .await;
}

/// Requests the mock server has seen so far.
pub async fn received(server: &MockServer) -> Vec<wiremock::Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled by default")
}

/// Query pairs of a recorded request, in order.
pub fn query_pairs(url: &Url) -> Vec<(String, String)> {
    url.query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn pair(key: &str, value: &str) -> (String, String) {
    (key.to_string(), value.to_string())
}
