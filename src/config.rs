//! Client configuration
//!
//! Connection settings for the USAJOBS API: where to send requests, how long
//! to wait, and which credentials to present. Values can be set in code,
//! loaded from the environment, or both.

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://data.usajobs.gov";

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "USAJOBS_BASE_URL";

/// Environment variable holding the account email
pub const ENV_AUTH_USER: &str = "USAJOBS_AUTH_USER";

/// Environment variable holding the API key
pub const ENV_AUTH_KEY: &str = "USAJOBS_AUTH_KEY";

/// Header carrying the API key
pub const AUTH_KEY_HEADER: &str = "Authorization-Key";

// ============================================================================
// Client Config
// ============================================================================

/// Connection settings for [`crate::UsaJobsClient`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout; `None` waits indefinitely
    #[serde(default)]
    pub timeout: Option<Duration>,

    /// Validate TLS certificates
    #[serde(default = "default_ssl_verify")]
    pub ssl_verify: bool,

    /// Email address associated with the API key, sent as `User-Agent`
    #[serde(default)]
    pub auth_user: Option<String>,

    /// API key for the Job Search API, sent as `Authorization-Key`
    #[serde(default)]
    pub auth_key: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_ssl_verify() -> bool {
    true
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: None,
            ssl_verify: true,
            auth_user: None,
            auth_key: None,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Defaults overridden by any `USAJOBS_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from an arbitrary lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(base_url) = value(ENV_BASE_URL) {
            config.base_url = base_url;
        }
        config.auth_user = value(ENV_AUTH_USER);
        config.auth_key = value(ENV_AUTH_KEY);
        config
    }

    /// Host name of the configured API root
    pub fn host(&self) -> Result<String> {
        let url = Url::parse(&self.base_url)?;
        url.host_str()
            .map(str::to_string)
            .ok_or_else(|| Error::config(format!("Base URL '{}' has no host", self.base_url)))
    }

    /// Check that the configuration can be used to build a client
    pub fn validate(&self) -> Result<()> {
        self.host()?;
        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(Error::config("Timeout must be greater than zero"));
        }
        Ok(())
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> Result<HttpClientConfig> {
        self.validate()?;

        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .ssl_verify(self.ssl_verify);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user) = &self.auth_user {
            builder = builder.user_agent(user);
        }
        if let Some(key) = &self.auth_key {
            builder = builder.header(AUTH_KEY_HEADER, key);
        }
        Ok(builder.build())
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API root URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Enable or disable TLS certificate validation
    pub fn ssl_verify(mut self, verify: bool) -> Self {
        self.config.ssl_verify = verify;
        self
    }

    /// Set the account email
    pub fn auth_user(mut self, user: impl Into<String>) -> Self {
        self.config.auth_user = Some(user.into());
        self
    }

    /// Set the API key
    pub fn auth_key(mut self, key: impl Into<String>) -> Self {
        self.config.auth_key = Some(key.into());
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.timeout.is_none());
        assert!(config.ssl_verify);
        assert!(config.auth_user.is_none());
        assert!(config.auth_key.is_none());
        assert_eq!(config.host().unwrap(), "data.usajobs.gov");
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::builder()
            .base_url("http://localhost:8080")
            .timeout(Duration::from_secs(5))
            .ssl_verify(false)
            .auth_user("someone@example.com")
            .auth_key("secret")
            .build();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert!(!config.ssl_verify);
        assert_eq!(config.auth_user.as_deref(), Some("someone@example.com"));
        assert_eq!(config.auth_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_from_lookup() {
        let env: HashMap<&str, &str> = [
            (ENV_BASE_URL, "http://127.0.0.1:9000"),
            (ENV_AUTH_USER, "someone@example.com"),
            (ENV_AUTH_KEY, "  "),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|key| env.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.auth_user.as_deref(), Some("someone@example.com"));
        assert!(config.auth_key.is_none());
    }

    #[test]
    fn test_http_config_carries_credentials() {
        let config = ClientConfig::builder()
            .auth_user("someone@example.com")
            .auth_key("secret")
            .timeout(Duration::from_secs(3))
            .build();

        let http = config.http_config().unwrap();
        assert_eq!(http.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(http.user_agent, "someone@example.com");
        assert_eq!(
            http.default_headers.get(AUTH_KEY_HEADER),
            Some(&"secret".to_string())
        );
        assert_eq!(http.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ClientConfig::builder().base_url("not a url").build();
        assert!(config.validate().is_err());

        let config = ClientConfig::builder().timeout(Duration::ZERO).build();
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"auth_key": "secret"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.ssl_verify);
        assert_eq!(config.auth_key.as_deref(), Some("secret"));
    }
}
