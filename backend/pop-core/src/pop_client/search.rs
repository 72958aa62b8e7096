use super::{ErrorContext, PopClient, QueryParams};
use crate::error::pop_client::PopClientError;
use crate::server::Server;

use serde::{Deserialize, Serialize};
use serde_json::Value;

const SEARCH_ENDPOINT: &str = "search";
const NULL_KEY: &str = "null";

pub(crate) const SEARCH_DATASETS: ErrorContext = ErrorContext::query("Error searching for datasets");

pub(crate) const ADVANCED_SEARCH: ErrorContext =
    ErrorContext::query("Error performing advanced search");

/// Filters for the multi-field search.
///
/// As query parameters every key is always sent, with an empty value when
/// unset. As a JSON body (see [`PopClient::advanced_search`]) unset fields are
/// left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_org: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Server>,
}

impl SearchFilters {
    /// Fixed-shape query: every filter key appears exactly once (or once per
    /// `filter_list` entry), `server` defaulting to [`Server::Global`].
    pub fn to_query(&self) -> QueryParams {
        let scalar_fields = [
            ("dataset_name", &self.dataset_name),
            ("dataset_title", &self.dataset_title),
            ("owner_org", &self.owner_org),
            ("resource_url", &self.resource_url),
            ("resource_name", &self.resource_name),
            ("dataset_description", &self.dataset_description),
            ("resource_description", &self.resource_description),
            ("resource_format", &self.resource_format),
            ("search_term", &self.search_term),
        ];

        let mut params = scalar_fields
            .into_iter()
            .fold(QueryParams::new(), |params, (key, value)| {
                params.with(key, value.as_deref().unwrap_or_default())
            });

        params = match self.filter_list.as_deref() {
            Some(filters) if !filters.is_empty() => params.with_each("filter_list", filters),
            _ => params.with("filter_list", ""),
        };

        params
            .with("timestamp", self.timestamp.as_deref().unwrap_or_default())
            .with_server(self.server.unwrap_or(Server::Global))
    }
}

impl PopClient {
    /// Search datasets by terms, optionally pinning each term to a key.
    ///
    /// When `keys` is given it must have one entry per term; a `None` key is
    /// sent as the literal `null` (match the term against any field).
    /// `server` defaults to [`Server::Global`].
    ///
    /// # Errors
    /// [`PopClientError::Precondition`] if the lengths differ; no request is sent.
    pub async fn search_datasets(
        &self,
        terms: &[&str],
        keys: Option<&[Option<&str>]>,
        server: Option<Server>,
    ) -> Result<Value, PopClientError> {
        if let Some(keys) = keys {
            if keys.len() != terms.len() {
                return Err(PopClientError::precondition(format!(
                    "The number of terms must match the number of keys ({} terms, {} keys)",
                    terms.len(),
                    keys.len()
                )));
            }
        }

        let mut params = QueryParams::new().with_each("terms", terms);
        if let Some(keys) = keys {
            params = params.with_each("keys", keys.iter().map(|k| k.unwrap_or(NULL_KEY)));
        }
        let params = params.with_server(server.unwrap_or(Server::Global));

        let url = self.endpoint_url(&[SEARCH_ENDPOINT])?;
        self.send_normalized(self.http.get(url).query(params.pairs()), &SEARCH_DATASETS)
            .await
    }

    /// Multi-field search via query parameters, see [`SearchFilters::to_query`].
    pub async fn search(&self, filters: &SearchFilters) -> Result<Value, PopClientError> {
        let url = self.endpoint_url(&[SEARCH_ENDPOINT])?;
        let params = filters.to_query();

        self.send_normalized(self.http.get(url).query(params.pairs()), &SEARCH_DATASETS)
            .await
    }

    /// POST a search filter object to `/search`.
    pub async fn advanced_search<B>(&self, filters: &B) -> Result<Value, PopClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint_url(&[SEARCH_ENDPOINT])?;
        self.send_normalized(self.http.post(url).json(filters), &ADVANCED_SEARCH)
            .await
    }
}
