//! Client configuration
//!
//! Defines how the client reaches the server: base URL, credentials and
//! transport settings. A configuration is immutable once the client is built.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Credential pair attached to every request as HTTP Basic authentication
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    /// Password or API key
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"****")
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL, including any context path
    /// (e.g., "http://localhost:8080/artifactory")
    pub base_url: String,

    /// Credentials sent with every request, if any
    pub credentials: Option<Credentials>,

    /// Whole-request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,

    /// Verify the server's TLS certificate
    pub verify_tls: bool,
}

impl ClientConfig {
    /// Creates a new configuration with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
            timeout: None,
            verify_tls: true,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - ARTIFACTORY_URL (required)
    /// - ARTIFACTORY_USERNAME (optional)
    /// - ARTIFACTORY_PASSWORD (optional, password or API key)
    /// - ARTIFACTORY_TIMEOUT (optional, whole seconds)
    /// - ARTIFACTORY_VERIFY_TLS (optional, `true` or `false`, default: true)
    ///
    /// A variable that is set but cannot be parsed is an error, not ignored.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("ARTIFACTORY_URL").ok_or_else(|| {
            ClientError::InvalidConfig("ARTIFACTORY_URL environment variable not set".to_string())
        })?;

        let credentials = lookup("ARTIFACTORY_USERNAME").map(|username| {
            Credentials::new(username, lookup("ARTIFACTORY_PASSWORD").unwrap_or_default())
        });

        let timeout = lookup("ARTIFACTORY_TIMEOUT")
            .map(|value| {
                value.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
                    ClientError::InvalidConfig(format!(
                        "ARTIFACTORY_TIMEOUT must be a whole number of seconds, got {:?}",
                        value
                    ))
                })
            })
            .transpose()?;

        let verify_tls = match lookup("ARTIFACTORY_VERIFY_TLS") {
            Some(value) => value.trim().parse::<bool>().map_err(|_| {
                ClientError::InvalidConfig(format!(
                    "ARTIFACTORY_VERIFY_TLS must be true or false, got {:?}",
                    value
                ))
            })?,
            None => true,
        };

        let config = Self {
            base_url,
            credentials,
            timeout,
            verify_tls,
        };
        config.validate()?;

        tracing::debug!(
            base_url = %config.base_url,
            authenticated = config.credentials.is_some(),
            "Loaded client configuration from environment"
        );
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if let Some(credentials) = &self.credentials {
            if credentials.username.is_empty() {
                return Err(ClientError::InvalidConfig(
                    "username cannot be empty".to_string(),
                ));
            }
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
