use super::PopClient;
use crate::error::pop_client::PopClientError;

use log::warn;
use serde_json::Value;

const STATUS_ENDPOINT: &str = "status";
const KAFKA_DETAILS_ENDPOINT: &str = "kafka-details";

impl PopClient {
    /// Kafka connection details (`kafka_host`, `kafka_port`, `kafka_connection`).
    ///
    /// Unlike the resource operations this wraps every failure kind with its
    /// own message: transport errors, error statuses and undecodable bodies.
    pub async fn get_kafka_details(&self) -> Result<Value, PopClientError> {
        let url = self.endpoint_url(&[STATUS_ENDPOINT, KAFKA_DETAILS_ENDPOINT])?;

        let response = self.dispatch(self.http.get(url)).await.map_err(|e| {
            PopClientError::connectivity(
                format!("An error occurred while fetching Kafka details: {e}"),
                &e,
            )
        })?;

        let status = response.status();
        let response = response.error_for_status().map_err(|e| {
            warn!("Kafka details request returned {}", status);
            PopClientError::remote(format!("Failed to fetch Kafka details: {e}"), status.as_u16())
        })?;

        let body = response.text().await.map_err(|e| {
            PopClientError::connectivity(
                format!("An error occurred while fetching Kafka details: {e}"),
                &e,
            )
        })?;

        serde_json::from_str(&body).map_err(|e| {
            PopClientError::decode(format!(
                "An error occurred while parsing Kafka details: {e}"
            ))
        })
    }
}
