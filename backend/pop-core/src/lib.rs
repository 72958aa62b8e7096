//! Client library for the point-of-presence data catalog REST service.
//!
//! The catalog stores organizations and datasets backed by Kafka topics, S3
//! objects and URLs. [`PopClient`] owns the normalized base URL, a pooled HTTP
//! session and the bearer token; each resource group (organizations, Kafka,
//! S3, URLs, generic resources, search, status) adds its operations in its own
//! module under [`pop_client`].
//!
//! ```rust,ignore
//! use pop_core::{ClientConfig, PopClient, Server};
//!
//! let config = ClientConfig::new("catalog.example.org").with_credentials("alice", "s3cret");
//! let client = PopClient::connect(config).await?;
//! let orgs = client.list_organizations(None, Some(Server::Local)).await?;
//! ```

pub mod config;
pub mod error;
pub mod pop_client;
pub mod server;

#[cfg(test)]
mod tests;

pub use config::ClientConfig;
pub use error::pop_client::PopClientError;
pub use pop_client::{PopClient, QueryParams, SearchFilters};
pub use server::Server;

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_SCHEME_PREFIX: &str = const_format::concatcp!(DEFAULT_SCHEME, "://");
pub const POP_USER_AGENT: &str = const_format::concatcp!("pop-core/", env!("CARGO_PKG_VERSION"));
