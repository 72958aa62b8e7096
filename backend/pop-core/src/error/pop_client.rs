//! Error type returned by every [`crate::PopClient`] operation.
//!
//! Key design decisions:
//! - One enum for the whole client; the variant says which layer failed
//! - Status codes stored as [`HttpStatusCode`], never parsed back out of text
//! - `message()` returns the caller-facing text without the location suffix
//! - All variants include `ErrorLocation`, captured via `#[track_caller]`

use crate::error::config::ConfigError;

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PopClientError {
    /// Invalid or conflicting construction arguments. No request was sent.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The service could not be reached at all.
    #[error("Connectivity Error: {message} {location}")]
    Connectivity {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    /// The availability check reached the service but got an error status.
    #[error("Service Unavailable: {message} {location}")]
    Unavailable {
        message: String,
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Authentication Error: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    /// Transport-level error passed through without normalization.
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        status: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    /// Error status from a resource operation, normalized from the `detail` field.
    #[error("Remote Error: {message} {location}")]
    Remote {
        message: String,
        status: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    /// Client-side argument validation failed before any request was sent.
    #[error("Precondition Error: {message} {location}")]
    Precondition {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl PopClientError {
    /// Wrap a transport failure, keeping the timeout/connect classification.
    #[track_caller]
    pub fn connectivity(message: impl Into<String>, error: &reqwest::Error) -> Self {
        PopClientError::Connectivity {
            message: message.into(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn unavailable(message: impl Into<String>, status: impl Into<HttpStatusCode>) -> Self {
        PopClientError::Unavailable {
            message: message.into(),
            status: status.into(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn authentication(message: impl Into<String>) -> Self {
        PopClientError::Authentication {
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn http(message: impl Into<String>, status: Option<HttpStatusCode>) -> Self {
        PopClientError::Http {
            message: message.into(),
            status,
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn remote(message: impl Into<String>, status: impl Into<HttpStatusCode>) -> Self {
        PopClientError::Remote {
            message: message.into(),
            status: status.into(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        PopClientError::Decode {
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn precondition(message: impl Into<String>) -> Self {
        PopClientError::Precondition {
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }

    /// Caller-facing message, without the error kind prefix or location.
    pub fn message(&self) -> String {
        match self {
            PopClientError::Config(error) => error.reason(),
            PopClientError::Connectivity { message, .. }
            | PopClientError::Unavailable { message, .. }
            | PopClientError::Authentication { message, .. }
            | PopClientError::Http { message, .. }
            | PopClientError::Remote { message, .. }
            | PopClientError::Decode { message, .. }
            | PopClientError::Precondition { message, .. }
            | PopClientError::UrlParse { message, .. } => message.clone(),
        }
    }

    /// HTTP status code if the error came from a response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PopClientError::Unavailable { status, .. } => Some(status.as_u16()),
            PopClientError::Remote { status, .. } => Some(status.as_u16()),
            PopClientError::Http { status, .. } => status.map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the failure happened before any response was received.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, PopClientError::Connectivity { .. })
    }

    /// Error category for logging.
    pub fn error_category(&self) -> &'static str {
        match self {
            PopClientError::Config(_) => "configuration",
            PopClientError::Connectivity { is_timeout: true, .. } => "timeout",
            PopClientError::Connectivity { .. } => "connectivity",
            PopClientError::Unavailable { .. } => "unavailable",
            PopClientError::Authentication { .. } => "authentication",
            PopClientError::Http { .. } => "http",
            PopClientError::Remote { status, .. } if status.is_server_error() => "remote_server",
            PopClientError::Remote { .. } => "remote",
            PopClientError::Decode { .. } => "decode",
            PopClientError::Precondition { .. } => "precondition",
            PopClientError::UrlParse { .. } => "url_parse",
        }
    }
}

impl From<url::ParseError> for PopClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        PopClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::here(),
        }
    }
}

impl From<reqwest::Error> for PopClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        PopClientError::Http {
            status: error.status().map(|s| HttpStatusCode(s.as_u16())),
            message: error.to_string(),
            location: ErrorLocation::here(),
        }
    }
}

impl From<serde_json::Error> for PopClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        PopClientError::Decode {
            message: error.to_string(),
            location: ErrorLocation::here(),
        }
    }
}
