use crate::server::Server;

use std::str::FromStr;

#[test]
fn given_server_names_when_parsed_then_round_trip_through_as_str() {
    for server in [Server::Local, Server::Global, Server::PreCkan] {
        assert_eq!(Server::from_str(server.as_str()).unwrap(), server);
    }
    assert_eq!(Server::from_str(" GLOBAL ").unwrap(), Server::Global);
    assert_eq!(Server::from_str("pre-ckan").unwrap(), Server::PreCkan);
}

#[test]
fn given_unknown_server_when_parsed_then_error_names_it() {
    let err = Server::from_str("staging").unwrap_err();

    assert!(err.reason().contains("staging"));
}

#[test]
fn given_server_when_serialized_then_uses_wire_name() {
    assert_eq!(serde_json::to_string(&Server::PreCkan).unwrap(), "\"pre_ckan\"");
    assert_eq!(Server::Local.to_string(), "local");
}
