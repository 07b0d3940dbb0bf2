//! Control-plane interface consumed by the operator

use async_trait::async_trait;
use tidewater_core::domain::job::Job;
use tidewater_core::dto::jar::{RunJarResponse, RunOptions, UploadJarResponse};
use tidewater_core::dto::savepoint::{CreateSavepointResponse, MonitorSavepointCreationResponse};

use crate::error::Result;

/// Operations the deployer needs from the cluster
///
/// `FlinkClient` implements this over HTTP. Everything above the client
/// depends on the trait so it can run against an in-memory cluster in tests.
#[async_trait]
pub trait ClusterApi: Send + Sync {
    /// List all jobs known to the cluster
    async fn retrieve_jobs(&self) -> Result<Vec<Job>>;

    /// Trigger a savepoint for a job
    ///
    /// # Arguments
    /// * `job_id` - The job to snapshot
    /// * `target_directory` - Where to write the savepoint; the cluster default when `None`
    async fn create_savepoint(
        &self,
        job_id: &str,
        target_directory: Option<&str>,
    ) -> Result<CreateSavepointResponse>;

    /// Read the status of a savepoint request
    async fn monitor_savepoint_creation(
        &self,
        job_id: &str,
        request_id: &str,
    ) -> Result<MonitorSavepointCreationResponse>;

    /// Cancel a running job
    async fn terminate(&self, job_id: &str) -> Result<()>;

    /// Upload a local jar to the cluster
    async fn upload_jar(&self, local_path: &str) -> Result<UploadJarResponse>;

    /// Start a job from an uploaded jar
    ///
    /// # Arguments
    /// * `jar_id` - Identifier of the uploaded jar
    /// * `savepoint_path` - Savepoint to restore state from
    /// * `options` - Entry class, arguments and parallelism
    async fn run_jar(
        &self,
        jar_id: &str,
        savepoint_path: Option<&str>,
        options: &RunOptions,
    ) -> Result<RunJarResponse>;
}

#[async_trait]
impl ClusterApi for crate::FlinkClient {
    async fn retrieve_jobs(&self) -> Result<Vec<Job>> {
        self.list_jobs().await
    }

    async fn create_savepoint(
        &self,
        job_id: &str,
        target_directory: Option<&str>,
    ) -> Result<CreateSavepointResponse> {
        self.trigger_savepoint(job_id, target_directory).await
    }

    async fn monitor_savepoint_creation(
        &self,
        job_id: &str,
        request_id: &str,
    ) -> Result<MonitorSavepointCreationResponse> {
        self.savepoint_status(job_id, request_id).await
    }

    async fn terminate(&self, job_id: &str) -> Result<()> {
        self.cancel_job(job_id).await
    }

    async fn upload_jar(&self, local_path: &str) -> Result<UploadJarResponse> {
        self.upload_local_jar(local_path).await
    }

    async fn run_jar(
        &self,
        jar_id: &str,
        savepoint_path: Option<&str>,
        options: &RunOptions,
    ) -> Result<RunJarResponse> {
        self.run_uploaded_jar(jar_id, savepoint_path, options).await
    }
}
