//! Shared building blocks for the point-of-presence client workspace.
//!
//! ## Contents
//!
//! - [`ErrorLocation`]: source location captured with `#[track_caller]` and
//!   attached to every error variant in the workspace
//! - [`HttpStatusCode`]: status code wrapper used for error categorization
//! - [`RedactedSecret`]: bearer tokens and passwords that never leak into logs

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
