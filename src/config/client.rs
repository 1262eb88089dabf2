use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::SdkError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a [`NodeClient`](crate::client::NodeClient).
///
/// A plain record: fill in the fields you care about and take the rest from
/// [`Default`]. Nothing is checked until [`validate`](Self::validate) runs,
/// which the client does once at construction.
///
/// ```rust
/// use strat::config::ClientConfig;
///
/// let config = ClientConfig {
///     auth_token: Some("secret".to_string()),
///     timeout_secs: 10,
///     ..ClientConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the node, e.g. `http://localhost:3000`.
    pub base_url: Url,
    /// Path under which the node mounts its API. `/health` ignores it.
    pub api_prefix: String,
    /// Sent as `Authorization: Bearer <token>` on every request when set.
    pub auth_token: Option<String>,
    /// Applies to the whole exchange; there is no per-call override.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            auth_token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, SdkError> {
        self.base_url = Url::parse(base_url)?;
        Ok(self)
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Checks the settings once, before any connection is built.
    pub fn validate(&self) -> Result<(), SdkError> {
        match self.base_url.scheme() {
            "http" | "https" => {},
            other => {
                return Err(SdkError::InvalidConfig(format!(
                    "base_url must use http or https, got `{other}`"
                )));
            },
        }
        if self.base_url.cannot_be_a_base() || self.base_url.host().is_none() {
            return Err(SdkError::InvalidConfig(format!(
                "base_url `{}` has no host",
                self.base_url
            )));
        }
        if self.base_url.query().is_some() || self.base_url.fragment().is_some() {
            return Err(SdkError::InvalidConfig(
                "base_url must not carry a query or fragment".to_string(),
            ));
        }
        if !self.api_prefix.is_empty() && (!self.api_prefix.starts_with('/') || self.api_prefix.ends_with('/')) {
            return Err(SdkError::InvalidConfig(format!(
                "api_prefix `{}` must be empty or start with `/` and not end with `/`",
                self.api_prefix
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SdkError::InvalidConfig("timeout_secs must be greater than zero".to_string()));
        }
        if self.auth_token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(SdkError::InvalidConfig("auth_token must not be blank".to_string()));
        }
        Ok(())
    }

    /// The base URL without a trailing slash, ready to have paths appended.
    pub(crate) fn root(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

// Keeps the bearer token out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_prefix", &self.api_prefix)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<REDACTED>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
