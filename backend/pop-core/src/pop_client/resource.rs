use super::{ErrorContext, PopClient, QueryParams};
use crate::error::pop_client::PopClientError;
use crate::server::Server;

use serde_json::Value;

const RESOURCE_ENDPOINT: &str = "resource";

pub(crate) const DELETE_RESOURCE: ErrorContext = ErrorContext::mutation(
    "Error deleting resource",
    &[("Resource not found", "Not found")],
);

impl PopClient {
    /// Delete a resource by id (`DELETE /resource?resource_id=...`).
    ///
    /// `server` defaults to [`Server::Local`].
    pub async fn delete_resource_by_id(
        &self,
        resource_id: &str,
        server: Option<Server>,
    ) -> Result<Value, PopClientError> {
        let url = self.endpoint_url(&[RESOURCE_ENDPOINT])?;
        let params = QueryParams::new()
            .with("resource_id", resource_id)
            .with_server(server.unwrap_or(Server::Local));

        self.send_normalized(self.http.delete(url).query(params.pairs()), &DELETE_RESOURCE)
            .await
    }

    /// Delete a resource by name (`DELETE /resource/{name}`).
    ///
    /// `server` defaults to [`Server::Local`], same as deletion by id.
    pub async fn delete_resource_by_name(
        &self,
        resource_name: &str,
        server: Option<Server>,
    ) -> Result<Value, PopClientError> {
        let url = self.endpoint_url(&[RESOURCE_ENDPOINT, resource_name])?;
        let params = QueryParams::new().with_server(server.unwrap_or(Server::Local));

        self.send_normalized(self.http.delete(url).query(params.pairs()), &DELETE_RESOURCE)
            .await
    }
}
