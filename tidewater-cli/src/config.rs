//! Configuration module
//!
//! Connection and timeout settings assembled from flags and environment.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tidewater_client::FlinkClient;
use tidewater_operator::{ClusterOperator, OperatorSettings};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the cluster REST API
    pub flink_url: String,

    pub username: Option<String>,
    pub password: Option<String>,

    /// Timeout for a single API request
    pub api_timeout: Option<Duration>,

    /// How long to wait for a savepoint to complete
    pub savepoint_timeout: Duration,
}

impl Config {
    pub fn from_args(
        flink_url: String,
        username: Option<String>,
        password: Option<String>,
        api_timeout_secs: Option<u64>,
        savepoint_timeout_secs: u64,
    ) -> Self {
        Self {
            flink_url,
            username,
            password,
            api_timeout: api_timeout_secs.map(Duration::from_secs),
            savepoint_timeout: Duration::from_secs(savepoint_timeout_secs),
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.flink_url.is_empty() {
            anyhow::bail!("flink_url cannot be empty");
        }

        if !self.flink_url.starts_with("http://") && !self.flink_url.starts_with("https://") {
            anyhow::bail!("flink_url must start with http:// or https://");
        }

        if self.password.is_some() && self.username.is_none() {
            anyhow::bail!("a basic auth password requires a username");
        }

        if self.api_timeout.is_some_and(|t| t.is_zero()) {
            anyhow::bail!("api_timeout must be greater than 0");
        }

        if self.savepoint_timeout.is_zero() {
            anyhow::bail!("savepoint_timeout must be greater than 0");
        }

        Ok(())
    }

    /// Build the cluster client described by this configuration
    pub fn client(&self) -> Result<FlinkClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.api_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        let client = FlinkClient::with_client(&self.flink_url, http);
        Ok(match &self.username {
            Some(username) => {
                client.with_basic_auth(username, self.password.clone().unwrap_or_default())
            }
            None => client,
        })
    }

    /// Build an operator against the configured cluster
    pub fn operator(&self) -> Result<ClusterOperator> {
        let client = self.client()?;
        Ok(
            ClusterOperator::new(Arc::new(client)).with_settings(OperatorSettings {
                savepoint_timeout: self.savepoint_timeout,
                ..OperatorSettings::default()
            }),
        )
    }
}
