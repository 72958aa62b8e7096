use super::{ErrorContext, PopClient, QueryParams};
use crate::error::pop_client::PopClientError;
use crate::server::Server;

use serde::Serialize;
use serde_json::Value;

const URL_ENDPOINT: &str = "url";

pub(crate) const REGISTER_URL: ErrorContext = ErrorContext::mutation(
    "Error creating URL resource",
    &[
        (
            "Organization does not exist",
            "Organization (owner_org) does not exist.",
        ),
        ("Group name already exists in database", "Name already exists."),
    ],
);

// "Reserved key error" and "Invalid input" details are already descriptive
// and pass through unchanged.
pub(crate) const UPDATE_URL_RESOURCE: ErrorContext = ErrorContext::mutation(
    "Error updating URL resource",
    &[("Resource not found", "Not found")],
);

impl PopClient {
    /// Register a URL resource. `server` defaults to [`Server::Local`].
    pub async fn register_url<B>(&self, data: &B, server: Option<Server>) -> Result<Value, PopClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(&[URL_ENDPOINT])?;
        let params = QueryParams::new().with_server(server.unwrap_or(Server::Local));

        self.send_normalized(
            self.http.post(url).query(params.pairs()).json(data),
            &REGISTER_URL,
        )
        .await
    }

    /// Update the URL resource `resource_id`. `server` defaults to [`Server::Local`].
    pub async fn update_url_resource<B>(
        &self,
        resource_id: &str,
        data: &B,
        server: Option<Server>,
    ) -> Result<Value, PopClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(&[URL_ENDPOINT, resource_id])?;
        let params = QueryParams::new().with_server(server.unwrap_or(Server::Local));

        self.send_normalized(
            self.http.put(url).query(params.pairs()).json(data),
            &UPDATE_URL_RESOURCE,
        )
        .await
    }
}
