use super::{ErrorContext, PopClient, QueryParams};
use crate::error::pop_client::PopClientError;
use crate::server::Server;

use serde::Serialize;
use serde_json::Value;

const S3_ENDPOINT: &str = "s3";

pub(crate) const REGISTER_S3_LINK: ErrorContext = ErrorContext::mutation(
    "Error creating S3 resource",
    &[
        (
            "Organization does not exist",
            "Organization (owner_org) does not exist",
        ),
        ("Reserved key error", "Reserved key conflict."),
        ("Invalid input", "Invalid input provided."),
    ],
);

pub(crate) const UPDATE_S3_RESOURCE: ErrorContext = ErrorContext::mutation(
    "Error updating S3 resource",
    &[("S3 resource not found", "Not found")],
);

impl PopClient {
    /// Register a link to an S3 object. `server` defaults to [`Server::Local`].
    pub async fn register_s3_link<B>(
        &self,
        data: &B,
        server: Option<Server>,
    ) -> Result<Value, PopClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(&[S3_ENDPOINT])?;
        let params = QueryParams::new().with_server(server.unwrap_or(Server::Local));

        self.send_normalized(
            self.http.post(url).query(params.pairs()).json(data),
            &REGISTER_S3_LINK,
        )
        .await
    }

    /// Update the S3 resource `resource_id`. `server` defaults to [`Server::Local`].
    pub async fn update_s3_resource<B>(
        &self,
        resource_id: &str,
        data: &B,
        server: Option<Server>,
    ) -> Result<Value, PopClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(&[S3_ENDPOINT, resource_id])?;
        let params = QueryParams::new().with_server(server.unwrap_or(Server::Local));

        self.send_normalized(
            self.http.put(url).query(params.pairs()).json(data),
            &UPDATE_S3_RESOURCE,
        )
        .await
    }
}
