use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Config Environment Error: {variable}: {reason} {location}")]
    EnvironmentError {
        location: ErrorLocation,
        variable: &'static str,
        reason: String,
    },

    #[error("Config Validation Error: {reason} {location}")]
    ValidationError {
        location: ErrorLocation,
        reason: String,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn validation(reason: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            location: ErrorLocation::here(),
            reason: reason.into(),
        }
    }

    #[track_caller]
    pub fn environment(variable: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::EnvironmentError {
            location: ErrorLocation::here(),
            variable,
            reason: reason.into(),
        }
    }

    /// The reason without the location suffix.
    pub fn reason(&self) -> String {
        match self {
            ConfigError::ReadError { source, .. } => source.to_string(),
            ConfigError::ParseError { reason, .. } => reason.clone(),
            ConfigError::EnvironmentError { reason, .. } => reason.clone(),
            ConfigError::ValidationError { reason, .. } => reason.clone(),
        }
    }
}
