//! Bare GET/POST/DELETE against `<base_url><endpoint>`.
//!
//! These do not normalize errors: an error status comes back as
//! [`PopClientError::Http`] carrying the status, exactly as the transport
//! reported it.

use super::{PopClient, QueryParams};
use crate::error::pop_client::PopClientError;

use serde::Serialize;
use serde_json::Value;
use url::Url;

impl PopClient {
    /// GET `endpoint` and decode the JSON body.
    pub async fn get(&self, endpoint: &str, params: &QueryParams) -> Result<Value, PopClientError> {
        let url = self.verb_url(endpoint)?;
        let response = self
            .dispatch(self.http.get(url).query(params.pairs()))
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// POST `body` as JSON to `endpoint` and decode the JSON reply.
    pub async fn post<B>(&self, endpoint: &str, body: &B) -> Result<Value, PopClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.verb_url(endpoint)?;
        let response = self
            .dispatch(self.http.post(url).json(body))
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    /// DELETE `endpoint`, returning the status code rather than the body.
    pub async fn delete(&self, endpoint: &str) -> Result<u16, PopClientError> {
        let url = self.verb_url(endpoint)?;
        let response = self
            .dispatch(self.http.delete(url))
            .await?
            .error_for_status()?;
        Ok(response.status().as_u16())
    }

    fn verb_url(&self, endpoint: &str) -> Result<Url, PopClientError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, endpoint))?)
    }
}
