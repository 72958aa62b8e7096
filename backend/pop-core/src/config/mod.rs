use crate::POP_USER_AGENT;
use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedSecret};

use std::env;
use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Deserializer};

pub const ENV_BASE_URL: &str = "POP_BASE_URL";
pub const ENV_TOKEN: &str = "POP_TOKEN";
pub const ENV_USERNAME: &str = "POP_USERNAME";
pub const ENV_PASSWORD: &str = "POP_PASSWORD";
pub const ENV_TIMEOUT_SECS: &str = "POP_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

// ============================================
// CONFIG STRUCTS
// ============================================

/// Connection settings for a [`crate::PopClient`].
///
/// At most one of `token` or the `username`/`password` pair may be set. With
/// neither, connecting checks the base URL is reachable instead of authenticating.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default)]
    pub token: Option<RedactedSecret>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<RedactedSecret>,
    #[serde(
        rename = "timeout_secs",
        default = "default_timeout",
        deserialize_with = "deserialize_secs"
    )]
    pub timeout: Duration,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// How a client authenticates, resolved from a validated [`ClientConfig`].
#[derive(Debug, Clone, Copy)]
pub enum Authentication<'a> {
    Token(&'a RedactedSecret),
    Credentials {
        username: &'a str,
        password: &'a RedactedSecret,
    },
    Anonymous,
}

impl Authentication<'_> {
    pub fn mode(&self) -> &'static str {
        match self {
            Authentication::Token(_) => "token",
            Authentication::Credentials { .. } => "credentials",
            Authentication::Anonymous => "anonymous",
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT_DURATION
}

fn default_user_agent() -> String {
    POP_USER_AGENT.to_string()
}

fn deserialize_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_secs)
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ClientConfig {
    /// Minimum allowed request timeout.
    pub const MIN_TIMEOUT: Duration = Duration::from_millis(100);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            username: None,
            password: None,
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }

    pub fn with_token(mut self, token: impl Into<RedactedSecret>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_credentials(
        self,
        username: impl Into<String>,
        password: impl Into<RedactedSecret>,
    ) -> Self {
        self.with_username(username).with_password(password)
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<RedactedSecret>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resolve the authentication mode.
    ///
    /// Empty strings count as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] when a token is combined with a
    /// username or password, or when only one of username/password is set.
    pub fn auth(&self) -> Result<Authentication<'_>, ConfigError> {
        let token = self.token.as_ref().filter(|t| !t.is_empty());
        let username = self.username.as_deref().filter(|u| !u.is_empty());
        let password = self.password.as_ref().filter(|p| !p.is_empty());

        match (token, username, password) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => Err(ConfigError::validation(
                "Provide either a token or username/password, not both.",
            )),
            (Some(token), None, None) => Ok(Authentication::Token(token)),
            (None, Some(username), Some(password)) => {
                Ok(Authentication::Credentials { username, password })
            }
            (None, Some(_), None) | (None, None, Some(_)) => Err(ConfigError::validation(
                "Username and password must be provided together.",
            )),
            (None, None, None) => Ok(Authentication::Anonymous),
        }
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::validation("base_url cannot be empty"));
        }

        if self.timeout < Self::MIN_TIMEOUT {
            return Err(ConfigError::validation(format!(
                "timeout ({:?}) must be >= {:?}",
                self.timeout,
                Self::MIN_TIMEOUT
            )));
        }

        self.auth()?;

        Ok(())
    }

    /// Load config from a TOML file.
    ///
    /// ```toml
    /// base_url = "catalog.example.org"
    /// username = "alice"
    /// password = "s3cret"
    /// timeout_secs = 10
    /// ```
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read client config {}: {}", path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::here(),
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config: ClientConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::here(),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate()?;

        info!("Client config loaded from {}", path.display());
        Ok(config)
    }

    /// Build config from `POP_*` environment variables.
    ///
    /// A `.env` file in the current directory is loaded first when present;
    /// variables already set in the process environment take precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvironmentError`] if `POP_BASE_URL` is missing,
    /// a variable is not valid unicode, or `POP_TIMEOUT_SECS` is not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {:?}", path),
            Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
            Err(e) => warn!("Failed to parse .env, using process environment: {}", e),
        }

        let base_url = read_env(ENV_BASE_URL)?
            .ok_or_else(|| ConfigError::environment(ENV_BASE_URL, "variable is not set"))?;

        let mut config = ClientConfig::new(base_url);
        config.token = read_env(ENV_TOKEN)?.map(RedactedSecret::new);
        config.username = read_env(ENV_USERNAME)?;
        config.password = read_env(ENV_PASSWORD)?.map(RedactedSecret::new);

        if let Some(raw) = read_env(ENV_TIMEOUT_SECS)? {
            let secs: u64 = raw.trim().parse().map_err(|e| {
                ConfigError::environment(ENV_TIMEOUT_SECS, format!("'{raw}' is not a number: {e}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }
}

fn read_env(variable: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(variable) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::environment(
            variable,
            "contains invalid unicode",
        )),
    }
}
