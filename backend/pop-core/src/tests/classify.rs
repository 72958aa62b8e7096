// Unit tests for detail-to-message classification

use crate::pop_client::ErrorContext;
use crate::pop_client::kafka::{REGISTER_KAFKA_TOPIC, UPDATE_KAFKA_TOPIC};
use crate::pop_client::organization::{DELETE_ORGANIZATION, LIST_ORGANIZATIONS, REGISTER_ORGANIZATION};
use crate::pop_client::resource::DELETE_RESOURCE;
use crate::pop_client::s3::{REGISTER_S3_LINK, UPDATE_S3_RESOURCE};
use crate::pop_client::search::SEARCH_DATASETS;
use crate::pop_client::url_resource::{REGISTER_URL, UPDATE_URL_RESOURCE};

const MUTATIONS: [(&str, ErrorContext); 9] = [
    ("register_kafka_topic", REGISTER_KAFKA_TOPIC),
    ("update_kafka_topic", UPDATE_KAFKA_TOPIC),
    ("register_organization", REGISTER_ORGANIZATION),
    ("delete_organization", DELETE_ORGANIZATION),
    ("delete_resource", DELETE_RESOURCE),
    ("register_s3_link", REGISTER_S3_LINK),
    ("update_s3_resource", UPDATE_S3_RESOURCE),
    ("register_url", REGISTER_URL),
    ("update_url_resource", UPDATE_URL_RESOURCE),
];

/// **VALUE**: Verifies every register/update/delete context collapses "not found" details.
///
/// **WHY THIS MATTERS**: Callers match on `Not found` to tell a missing entity apart from a
/// rejected payload, regardless of how the service phrases it.
///
/// **BUG THIS CATCHES**: Would catch a new mutation context built with `ErrorContext::query`.
#[test]
fn given_not_found_detail_when_any_mutation_describes_then_message_says_not_found() {
    for (operation, context) in MUTATIONS {
        let message = context.describe("Widget not found");
        assert!(
            message.ends_with(": Not found"),
            "{operation} produced '{message}'"
        );
    }
}

#[test]
fn given_unrecognized_detail_when_described_then_passes_through_verbatim() {
    for (operation, context) in MUTATIONS {
        let message = context.describe("owner_org is required");
        assert!(
            message.ends_with(": owner_org is required"),
            "{operation} produced '{message}'"
        );
    }
}

#[test]
fn given_duplicate_group_detail_when_registering_organization_then_rewrites_message() {
    assert_eq!(
        REGISTER_ORGANIZATION.describe("Group name already exists in database"),
        "Error creating organization: Organization name already exists"
    );
}

#[test]
fn given_s3_markers_when_registering_s3_link_then_each_maps_to_its_message() {
    assert_eq!(
        REGISTER_S3_LINK.describe("Reserved key error: 'name' is reserved"),
        "Error creating S3 resource: Reserved key conflict."
    );
    assert_eq!(
        REGISTER_S3_LINK.describe("Invalid input: bucket"),
        "Error creating S3 resource: Invalid input provided."
    );
    assert_eq!(
        REGISTER_S3_LINK.describe("Organization does not exist"),
        "Error creating S3 resource: Organization (owner_org) does not exist"
    );
}

#[test]
fn given_url_markers_when_registering_url_then_each_maps_to_its_message() {
    assert_eq!(
        REGISTER_URL.describe("Organization does not exist"),
        "Error creating URL resource: Organization (owner_org) does not exist."
    );
    assert_eq!(
        REGISTER_URL.describe("Group name already exists in database"),
        "Error creating URL resource: Name already exists."
    );
}

#[test]
fn given_reserved_key_detail_when_updating_url_then_detail_is_kept() {
    assert_eq!(
        UPDATE_URL_RESOURCE.describe("Reserved key error: 'url'"),
        "Error updating URL resource: Reserved key error: 'url'"
    );
}

#[test]
fn given_not_found_detail_when_listing_then_detail_is_not_collapsed() {
    assert_eq!(
        LIST_ORGANIZATIONS.describe("Server not found"),
        "Error listing organizations: Server not found"
    );
    assert_eq!(
        SEARCH_DATASETS.describe("Index not found"),
        "Error searching for datasets: Index not found"
    );
}
