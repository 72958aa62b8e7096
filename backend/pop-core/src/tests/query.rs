// Unit tests for QueryParams and SearchFilters query shaping

use crate::pop_client::{QueryParams, SearchFilters};
use crate::server::Server;

#[test]
fn given_optional_values_when_added_then_none_is_omitted() {
    let params = QueryParams::new()
        .with_opt("name", Some("org-a"))
        .with_opt::<&str>("missing", None)
        .with_server(Server::Global);

    assert_eq!(
        params.pairs(),
        &[
            ("name".to_string(), "org-a".to_string()),
            ("server".to_string(), "global".to_string()),
        ]
    );
}

#[test]
fn given_list_values_when_added_then_key_is_repeated_in_order() {
    let params = QueryParams::new().with_each("terms", ["a", "b", "c"]);

    assert_eq!(params.get_all("terms"), vec!["a", "b", "c"]);
    assert!(QueryParams::new().is_empty());
}

/// **VALUE**: Verifies the multi-field search always sends the same key set.
///
/// **WHY THIS MATTERS**: The search endpoint distinguishes the GET filter form from the
/// free-form POST by its fixed parameter shape; dropping unset keys changes its meaning.
///
/// **BUG THIS CATCHES**: Would catch `with_opt` being used for filters.
#[test]
fn given_empty_filters_when_converted_then_every_key_is_present() {
    let params = SearchFilters::default().to_query();

    let keys: Vec<&str> = params.pairs().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "dataset_name",
            "dataset_title",
            "owner_org",
            "resource_url",
            "resource_name",
            "dataset_description",
            "resource_description",
            "resource_format",
            "search_term",
            "filter_list",
            "timestamp",
            "server",
        ]
    );
    assert_eq!(params.get_all("dataset_name"), vec![""]);
    assert_eq!(params.get_all("server"), vec!["global"]);
}

#[test]
fn given_some_filters_when_converted_then_values_and_lists_are_sent() {
    let filters = SearchFilters {
        owner_org: Some("ndp".to_string()),
        filter_list: Some(vec!["format:CSV".to_string(), "tag:ocean".to_string()]),
        server: Some(Server::Local),
        ..SearchFilters::default()
    };

    let params = filters.to_query();

    assert_eq!(params.get_all("owner_org"), vec!["ndp"]);
    assert_eq!(params.get_all("filter_list"), vec!["format:CSV", "tag:ocean"]);
    assert_eq!(params.get_all("server"), vec!["local"]);
}

#[test]
fn given_filters_when_serialized_as_body_then_unset_fields_are_skipped() {
    let filters = SearchFilters {
        search_term: Some("ocean".to_string()),
        ..SearchFilters::default()
    };

    let body = serde_json::to_value(&filters).unwrap();

    assert_eq!(body, serde_json::json!({"search_term": "ocean"}));
}
