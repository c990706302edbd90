//! Rustifactory HTTP Client
//!
//! A type-safe HTTP client for the repository management API of an
//! Artifactory-style artifact server.
//!
//! # Example
//!
//! ```no_run
//! use rustifactory_client::{ArtifactoryClient, ClientConfig, Credentials};
//! use rustifactory_core::dto::LocalRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::new("http://localhost:8080/artifactory")
//!         .with_credentials(Credentials::new("admin", "password"));
//!     let client = ArtifactoryClient::from_config(&config)?;
//!
//!     let repo = client
//!         .create_local_repo(&LocalRepository::new("libs-release-local"))
//!         .await?;
//!
//!     println!("Created repository: {}", repo.repository.key);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
mod repositories;

// Re-export commonly used types
pub use config::{ClientConfig, Credentials};
pub use error::{ClientError, Result};

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the repository manager API
///
/// The client holds only immutable configuration and a pooled HTTP client, so
/// it is cheap to clone and safe to share between tasks.
#[derive(Debug, Clone)]
pub struct ArtifactoryClient {
    /// Base URL of the server (e.g., "http://localhost:8080/artifactory")
    base_url: String,
    /// Credentials attached to every request
    credentials: Option<Credentials>,
    /// HTTP client instance
    client: Client,
}

impl ArtifactoryClient {
    /// Create a new client without credentials
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the server, including any context path
    ///
    /// # Example
    /// ```
    /// use rustifactory_client::ArtifactoryClient;
    ///
    /// let client = ArtifactoryClient::new("http://localhost:8080/artifactory");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials: None,
            client,
        }
    }

    /// Create a client from a validated configuration
    ///
    /// # Example
    /// ```
    /// use rustifactory_client::{ArtifactoryClient, ClientConfig, Credentials};
    /// use std::time::Duration;
    ///
    /// let config = ClientConfig::new("http://localhost:8080/artifactory")
    ///     .with_credentials(Credentials::new("user", "password_or_apiKey"))
    ///     .with_timeout(Duration::from_secs(30));
    ///
    /// let client = ArtifactoryClient::from_config(&config).unwrap();
    /// ```
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = Self::with_client(config.base_url.clone(), builder.build()?);
        Ok(match &config.credentials {
            Some(credentials) => client.with_credentials(credentials.clone()),
            None => client,
        })
    }

    /// Attach credentials to every request made by this client
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Get the base URL of the server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an API URL under the base URL
    ///
    /// Each segment is percent-encoded, so a key containing `/`, `?`, `#` or
    /// spaces stays a single path segment.
    fn api_url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidConfig(format!("Invalid base URL {}: {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidConfig(format!("Base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("api")
            .extend(segments);

        Ok(url)
    }

    /// Start a request with authentication applied
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!(%method, %url, "Sending request");

        let builder = self.client.request(method, url);
        match &self.credentials {
            Some(credentials) => {
                builder.basic_auth(&credentials.username, Some(&credentials.password))
            }
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Pass a successful response through, or turn its status and body into an
    /// `ApiError`
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %response.url(), "Received response");

        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ClientError::api_error(status.as_u16(), message))
    }

    /// Check the status of a response and deserialize its JSON body
    ///
    /// The body is read as text first so a schema mismatch surfaces as
    /// `ParseError` rather than as a transport error.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let body = Self::check_status(response).await?.text().await?;

        serde_json::from_str(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Check the status of a response whose body is ignored (e.g., DELETE)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        Self::check_status(response).await.map(|_| ())
    }
}
