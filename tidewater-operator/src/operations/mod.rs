//! Job lifecycle operations
//!
//! `Operator` is what the CLI drives. `ClusterOperator` implements it on top
//! of a `ClusterApi` and a `SavepointResolver`, both injected so the whole
//! flow can run against in-memory doubles.

mod deploy;
mod request;
mod terminate;
mod update;

pub use request::{Deploy, TerminateJob, TerminateTarget, UpdateJob};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tidewater_client::ClusterApi;
use tidewater_core::domain::job::Job;
use tidewater_core::domain::savepoint::SavepointCreationHandle;
use tracing::info;

use crate::error::{OperatorError, Result};
use crate::monitor::await_savepoint;
use crate::savepoint::SavepointResolver;

/// Everything the deployer can do to a cluster
#[async_trait]
pub trait Operator: Send + Sync {
    /// Upload and start a job, optionally restoring the latest savepoint
    async fn deploy(&self, deploy: Deploy) -> Result<()>;

    /// Replace the running instance of a job family with a new artifact
    async fn update(&self, update: UpdateJob) -> Result<()>;

    /// List the jobs on the cluster
    async fn retrieve_jobs(&self) -> Result<Vec<Job>>;

    /// Cancel a job, optionally taking a savepoint first
    async fn terminate(&self, terminate: TerminateJob) -> Result<()>;
}

/// Tuning for savepoint creation
#[derive(Debug, Clone)]
pub struct OperatorSettings {
    /// How long to wait for a savepoint before giving up
    pub savepoint_timeout: Duration,

    /// Delay between savepoint status polls
    pub poll_interval: Duration,
}

impl Default for OperatorSettings {
    fn default() -> Self {
        Self {
            savepoint_timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// Operator backed by the cluster's control plane
pub struct ClusterOperator {
    cluster: Arc<dyn ClusterApi>,
    resolver: SavepointResolver,
    settings: OperatorSettings,
}

impl ClusterOperator {
    /// Creates an operator that resolves savepoints on local disk or S3
    pub fn new(cluster: Arc<dyn ClusterApi>) -> Self {
        Self::with_resolver(cluster, SavepointResolver::default())
    }

    pub fn with_resolver(cluster: Arc<dyn ClusterApi>, resolver: SavepointResolver) -> Self {
        Self {
            cluster,
            resolver,
            settings: OperatorSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: OperatorSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &OperatorSettings {
        &self.settings
    }

    async fn fetch_jobs(&self) -> Result<Vec<Job>> {
        self.cluster
            .retrieve_jobs()
            .await
            .map_err(OperatorError::RetrieveJobs)
    }

    /// Trigger a savepoint and wait until the cluster reports it complete
    async fn savepoint_job(&self, job_id: &str, target_directory: Option<&str>) -> Result<()> {
        info!("Creating savepoint for job {}", job_id);

        let response = self
            .cluster
            .create_savepoint(job_id, target_directory)
            .await
            .map_err(|source| OperatorError::CreateSavepoint {
                job_id: job_id.to_string(),
                source,
            })?;

        let handle = SavepointCreationHandle {
            job_id: job_id.to_string(),
            request_id: response.request_id,
        };

        await_savepoint(
            self.cluster.as_ref(),
            &handle,
            self.settings.savepoint_timeout,
            self.settings.poll_interval,
        )
        .await
    }

    async fn cancel_job(&self, job_id: &str) -> Result<()> {
        info!("Cancelling job {}", job_id);

        self.cluster
            .terminate(job_id)
            .await
            .map_err(|source| OperatorError::Cancel {
                job_id: job_id.to_string(),
                source,
            })
    }
}

#[async_trait]
impl Operator for ClusterOperator {
    async fn deploy(&self, deploy: Deploy) -> Result<()> {
        self.deploy_job(deploy).await
    }

    async fn update(&self, update: UpdateJob) -> Result<()> {
        self.update_job(update).await
    }

    async fn retrieve_jobs(&self) -> Result<Vec<Job>> {
        self.fetch_jobs().await
    }

    async fn terminate(&self, terminate: TerminateJob) -> Result<()> {
        self.terminate_job(terminate).await
    }
}
