//! Catalog client: session bootstrap plus one module per resource group.
//!
//! # Design
//! `PopClient` owns the normalized base URL, a pooled `reqwest::Client` and
//! the bearer token. The token is attached to each request in
//! `prepare_request` and only ever replaced through `get_token(&mut self)`.
//! Resource modules add their operations as further `impl PopClient` blocks
//! and route error responses through `send_normalized`, which applies the
//! operation's [`ErrorContext`].

mod classify;
pub(crate) mod kafka;
pub(crate) mod organization;
mod query;
pub(crate) mod resource;
pub(crate) mod s3;
pub(crate) mod search;
mod status;
pub(crate) mod url_resource;
mod verbs;

pub(crate) use classify::ErrorContext;
pub use query::QueryParams;
pub use search::SearchFilters;

use crate::config::{Authentication, ClientConfig};
use crate::error::pop_client::PopClientError;
use crate::DEFAULT_SCHEME_PREFIX;

use common::{ErrorLocation, HttpStatusCode, RedactedSecret};

use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use url::Url;

const TOKEN_ENDPOINT: &str = "token";
const ACCESS_TOKEN_FIELD: &str = "access_token";
const DETAIL_FIELD: &str = "detail";

#[derive(Debug, Clone)]
pub struct PopClient {
    base_url: String,
    http: Client,
    token: Option<RedactedSecret>,
}

impl PopClient {
    /// Connect anonymously: normalize `base_url` and check it is reachable.
    pub async fn new(base_url: &str) -> Result<Self, PopClientError> {
        Self::connect(ClientConfig::new(base_url)).await
    }

    /// Build a client and authenticate it according to `config`.
    ///
    /// - token: stored as-is, no request is sent
    /// - username + password: exchanged for a token at `/token`
    /// - nothing: `GET base_url` must succeed
    ///
    /// # Errors
    /// Configuration errors are returned before any request is sent.
    pub async fn connect(config: ClientConfig) -> Result<Self, PopClientError> {
        config.validate()?;
        let auth = config.auth()?;

        let base_url = normalize_base_url(&config.base_url)?;
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        let mut client = Self {
            base_url,
            http,
            token: None,
        };

        match auth {
            Authentication::Token(token) => client.set_token(token.clone()),
            Authentication::Credentials { username, password } => {
                client.get_token(username, password.expose()).await?
            }
            Authentication::Anonymous => client.check_api_availability().await?,
        }

        info!(
            "Connected to catalog at {} ({} auth)",
            client.base_url,
            auth.mode()
        );
        Ok(client)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The current bearer token, if one has been set.
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(RedactedSecret::expose)
    }

    /// The `Authorization` header value attached to every request.
    pub fn authorization_header(&self) -> Option<String> {
        self.token
            .as_ref()
            .map(|token| format!("Bearer {}", token.expose()))
    }

    /// Exchange credentials for a bearer token at `<base_url>/token`.
    ///
    /// On success the token replaces any previous one and is sent with every
    /// later request. On failure the previous token is kept.
    ///
    /// # Errors
    /// - [`PopClientError::Connectivity`] if the request could not be sent
    /// - [`PopClientError::Authentication`] on 401, or when the reply carries no
    ///   non-empty string `access_token` (including non-JSON replies)
    /// - [`PopClientError::Http`] for any other error status
    pub async fn get_token(&mut self, username: &str, password: &str) -> Result<(), PopClientError> {
        let url = self.endpoint_url(&[TOKEN_ENDPOINT])?;
        let form = [("username", username), ("password", password)];

        let response = self
            .dispatch(self.http.post(url).form(&form))
            .await
            .map_err(|e| {
                warn!("Token request to {} failed: {}", self.base_url, e);
                if e.is_connect() {
                    PopClientError::connectivity(self.unreachable_message(), &e)
                } else {
                    PopClientError::connectivity(
                        format!("An error occurred while attempting to obtain the token: {e}"),
                        &e,
                    )
                }
            })?;

        if HttpStatusCode(response.status().as_u16()) == HttpStatusCode::UNAUTHORIZED {
            warn!("Token exchange rejected for user {}", username);
            return Err(PopClientError::authentication(
                "Authentication failed: Invalid username or password.",
            ));
        }

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                let status = e.status().map(|s| HttpStatusCode(s.as_u16()));
                return Err(PopClientError::http(format!("HTTP error occurred: {e}"), status));
            }
        };

        let body = response.text().await?;

        match access_token(&body) {
            Some(token) => {
                self.set_token(RedactedSecret::new(token));
                debug!("Obtained bearer token for user {}", username);
                Ok(())
            }
            None => Err(PopClientError::authentication(
                "Authentication failed: No access token received.",
            )),
        }
    }

    /// Replace the bearer token. The only place the token is mutated.
    fn set_token(&mut self, token: RedactedSecret) {
        self.token = Some(token);
    }

    async fn check_api_availability(&self) -> Result<(), PopClientError> {
        let url = Url::parse(&self.base_url)?;

        let response = self.dispatch(self.http.get(url)).await.map_err(|e| {
            warn!("Availability check of {} failed: {}", self.base_url, e);
            if e.is_connect() {
                PopClientError::connectivity(self.unreachable_message(), &e)
            } else {
                PopClientError::connectivity(
                    format!("An error occurred while attempting to connect to the API: {e}"),
                    &e,
                )
            }
        })?;

        let status = response.status();
        if let Err(e) = response.error_for_status() {
            warn!("Availability check of {} returned {}", self.base_url, status);
            return Err(PopClientError::unavailable(
                format!(
                    "API connection check failed with status code {}: {e}",
                    status.as_u16()
                ),
                status.as_u16(),
            ));
        }

        Ok(())
    }

    fn unreachable_message(&self) -> String {
        format!(
            "Failed to connect to the API at {}. Please check if the URL is correct and reachable.",
            self.base_url
        )
    }

    /// `<base_url>/<segment>/<segment>...` with each segment percent-encoded.
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url, PopClientError> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| PopClientError::UrlParse {
                message: format!("{} cannot be used as a base URL", self.base_url),
                location: ErrorLocation::here(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn prepare_request(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose()),
            None => request,
        }
    }

    /// Attach auth, log and send. Transport errors are left to the caller.
    pub(crate) async fn dispatch(&self, request: RequestBuilder) -> Result<Response, reqwest::Error> {
        let request = self.prepare_request(request).build()?;
        debug!("{} {}", request.method(), request.url());
        self.http.execute(request).await
    }

    /// Send a resource request, decoding JSON on success and normalizing
    /// error statuses through `context`.
    ///
    /// An empty success body (e.g. `204 No Content`) decodes to `Value::Null`.
    pub(crate) async fn send_normalized(
        &self,
        request: RequestBuilder,
        context: &ErrorContext,
    ) -> Result<Value, PopClientError> {
        let response = self.dispatch(request).await?;

        if !response.status().is_success() {
            return Err(normalized_error(response, context).await);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Prepend `http://` when no scheme is present and strip trailing slashes.
///
/// # Errors
/// Returns [`PopClientError::UrlParse`] if the result is not a valid URL.
pub fn normalize_base_url(raw: &str) -> Result<String, PopClientError> {
    let raw = raw.trim();
    let qualified = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{raw}")
    };
    let normalized = qualified.trim_end_matches('/').to_string();

    Url::parse(&normalized)?;
    Ok(normalized)
}

/// The non-empty string `access_token` of a token reply, if there is one.
fn access_token(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get(ACCESS_TOKEN_FIELD)
        .and_then(Value::as_str)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// The `detail` field of an error body; non-string details are rendered as JSON.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get(DETAIL_FIELD)? {
        Value::Null => None,
        Value::String(detail) => Some(detail.clone()),
        other => Some(other.to_string()),
    }
}

async fn normalized_error(response: Response, context: &ErrorContext) -> PopClientError {
    let status = response.status();
    let fallback = match response.error_for_status_ref() {
        Err(e) => e.to_string(),
        Ok(_) => format!("HTTP status {status}"),
    };

    let body = response.text().await.unwrap_or_default();
    let detail = extract_detail(&body).unwrap_or(fallback);
    let message = context.describe(&detail);

    warn!("{} (HTTP {})", message, status.as_u16());
    PopClientError::remote(message, status.as_u16())
}
