//! Tidewater HTTP Client
//!
//! A type-safe client for the stream-processing cluster's REST control plane.
//!
//! The operator consumes the cluster through the [`ClusterApi`] trait;
//! [`FlinkClient`] is the HTTP implementation used in production.
//!
//! # Example
//!
//! ```no_run
//! use tidewater_client::FlinkClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FlinkClient::new("http://localhost:8081");
//!
//!     for job in client.list_jobs().await? {
//!         println!("{} {} {}", job.id, job.name, job.status);
//!     }
//!     Ok(())
//! }
//! ```

mod api;
pub mod error;
mod jars;
mod jobs;
mod savepoints;

pub use api::ClusterApi;
pub use error::{ClientError, Result};

use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Credentials for HTTP basic authentication
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// HTTP client for the cluster REST API
///
/// Endpoints are grouped by resource:
/// - Jobs (overview, cancel)
/// - Savepoints (trigger, status)
/// - Jars (upload, run)
#[derive(Debug, Clone)]
pub struct FlinkClient {
    /// Base URL of the cluster (e.g., "http://localhost:8081")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Optional basic auth applied to every request
    auth: Option<BasicAuth>,
}

impl FlinkClient {
    /// Create a new cluster client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the cluster REST API (e.g., "http://localhost:8081")
    ///
    /// # Example
    /// ```
    /// use tidewater_client::FlinkClient;
    ///
    /// let client = FlinkClient::new("http://localhost:8081");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new cluster client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use tidewater_client::FlinkClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = FlinkClient::with_client("http://localhost:8081", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            auth: None,
        }
    }

    /// Authenticate every request with HTTP basic auth
    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(BasicAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Get the base URL of the cluster
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request against a path relative to the base URL
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let builder = self.client.request(method, url);
        match &self.auth {
            Some(auth) => builder.basic_auth(&auth.username, Some(&auth.password)),
            None => builder,
        }
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is irrelevant (e.g., cancel)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }
}
