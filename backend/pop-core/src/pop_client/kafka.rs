use super::{ErrorContext, PopClient, QueryParams};
use crate::error::pop_client::PopClientError;
use crate::server::Server;

use serde::Serialize;
use serde_json::Value;

const KAFKA_ENDPOINT: &str = "kafka";

pub(crate) const REGISTER_KAFKA_TOPIC: ErrorContext = ErrorContext::mutation(
    "Error creating Kafka dataset",
    &[(
        "Organization does not exist",
        "Organization (owner_org) does not exist",
    )],
);

pub(crate) const UPDATE_KAFKA_TOPIC: ErrorContext = ErrorContext::mutation(
    "Error updating Kafka dataset",
    &[("Kafka dataset not found", "Not found")],
);

impl PopClient {
    /// Register a Kafka topic as a dataset. `server` defaults to [`Server::Local`].
    pub async fn register_kafka_topic<B>(
        &self,
        data: &B,
        server: Option<Server>,
    ) -> Result<Value, PopClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(&[KAFKA_ENDPOINT])?;
        let params = QueryParams::new().with_server(server.unwrap_or(Server::Local));

        self.send_normalized(
            self.http.post(url).query(params.pairs()).json(data),
            &REGISTER_KAFKA_TOPIC,
        )
        .await
    }

    /// Update the Kafka dataset `dataset_id`. `server` defaults to [`Server::Local`].
    pub async fn update_kafka_topic<B>(
        &self,
        dataset_id: &str,
        data: &B,
        server: Option<Server>,
    ) -> Result<Value, PopClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(&[KAFKA_ENDPOINT, dataset_id])?;
        let params = QueryParams::new().with_server(server.unwrap_or(Server::Local));

        self.send_normalized(
            self.http.put(url).query(params.pairs()).json(data),
            &UPDATE_KAFKA_TOPIC,
        )
        .await
    }
}
