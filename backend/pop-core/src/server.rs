//! Server selector sent as the `server` query parameter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which backing catalog instance an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Server {
    Local,
    Global,
    PreCkan,
}

impl Server {
    pub const QUERY_KEY: &'static str = "server";

    pub fn as_str(&self) -> &'static str {
        match self {
            Server::Local => "local",
            Server::Global => "global",
            Server::PreCkan => "pre_ckan",
        }
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Server {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Server::Local),
            "global" => Ok(Server::Global),
            "pre_ckan" | "pre-ckan" => Ok(Server::PreCkan),
            other => Err(ConfigError::validation(format!(
                "Unknown server '{other}' (expected local, global or pre_ckan)"
            ))),
        }
    }
}
