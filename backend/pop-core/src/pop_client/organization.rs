use super::{ErrorContext, PopClient, QueryParams};
use crate::error::pop_client::PopClientError;
use crate::server::Server;

use serde::Serialize;
use serde_json::Value;

const ORGANIZATION_ENDPOINT: &str = "organization";

pub(crate) const REGISTER_ORGANIZATION: ErrorContext = ErrorContext::mutation(
    "Error creating organization",
    &[(
        "Group name already exists in database",
        "Organization name already exists",
    )],
);

pub(crate) const LIST_ORGANIZATIONS: ErrorContext =
    ErrorContext::query("Error listing organizations");

pub(crate) const DELETE_ORGANIZATION: ErrorContext = ErrorContext::mutation(
    "Error deleting organization",
    &[("Organization not found", "Not found")],
);

impl PopClient {
    /// Register a new organization.
    ///
    /// Returns the service's reply (organization id and message).
    pub async fn register_organization<B>(&self, data: &B) -> Result<Value, PopClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(&[ORGANIZATION_ENDPOINT])?;
        self.send_normalized(self.http.post(url).json(data), &REGISTER_ORGANIZATION)
            .await
    }

    /// List organization names, optionally filtered by `name`.
    ///
    /// `server` defaults to [`Server::Global`].
    pub async fn list_organizations(
        &self,
        name: Option<&str>,
        server: Option<Server>,
    ) -> Result<Value, PopClientError> {
        let url = self.endpoint_url(&[ORGANIZATION_ENDPOINT])?;
        let params = QueryParams::new()
            .with_server(server.unwrap_or(Server::Global))
            .with_opt("name", name.filter(|n| !n.is_empty()));

        self.send_normalized(self.http.get(url).query(params.pairs()), &LIST_ORGANIZATIONS)
            .await
    }

    /// Delete the organization called `organization_name`.
    ///
    /// `server` defaults to [`Server::Local`].
    pub async fn delete_organization(
        &self,
        organization_name: &str,
        server: Option<Server>,
    ) -> Result<Value, PopClientError> {
        let url = self.endpoint_url(&[ORGANIZATION_ENDPOINT, organization_name])?;
        let params = QueryParams::new().with_server(server.unwrap_or(Server::Local));

        self.send_normalized(self.http.delete(url).query(params.pairs()), &DELETE_ORGANIZATION)
            .await
    }
}
