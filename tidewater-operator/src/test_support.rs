//! In-memory cluster for operator tests

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use tidewater_client::{ClientError, ClusterApi, Result};
use tidewater_core::domain::job::{Job, JobStatus};
use tidewater_core::domain::savepoint::SavepointCreationStatus;
use tidewater_core::dto::jar::{RunJarResponse, RunOptions, UploadJarResponse};
use tidewater_core::dto::savepoint::{
    CreateSavepointResponse, MonitorSavepointCreationResponse, QueueStatus,
};

pub fn job(id: &str, name: &str, status: JobStatus) -> Job {
    Job {
        id: id.to_string(),
        name: name.to_string(),
        status,
        start_time: None,
    }
}

/// Cluster double that answers from canned data and records every call
///
/// Savepoint states are served in order; the last one repeats.
#[derive(Default)]
pub struct FakeCluster {
    jobs: Vec<Job>,
    savepoint_states: Mutex<VecDeque<SavepointCreationStatus>>,
    failures: HashMap<&'static str, String>,
    calls: Mutex<Vec<String>>,
    run_requests: Mutex<Vec<(String, Option<String>, RunOptions)>>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default().with_savepoint_states(vec![SavepointCreationStatus::Completed])
    }

    pub fn with_jobs(mut self, jobs: Vec<Job>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_savepoint_states(self, states: Vec<SavepointCreationStatus>) -> Self {
        *self.savepoint_states.lock().unwrap() = states.into();
        self
    }

    /// Make the named call fail with a 500 carrying `message`
    pub fn failing(mut self, call: &'static str, message: &str) -> Self {
        self.failures.insert(call, message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn run_requests(&self) -> Vec<(String, Option<String>, RunOptions)> {
        self.run_requests.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str, args: &[&str]) -> Result<()> {
        let mut entry = call.to_string();
        for arg in args {
            entry.push(':');
            entry.push_str(arg);
        }
        self.calls.lock().unwrap().push(entry);

        match self.failures.get(call) {
            Some(message) => Err(ClientError::api_error(500, message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ClusterApi for FakeCluster {
    async fn retrieve_jobs(&self) -> Result<Vec<Job>> {
        self.record("retrieve_jobs", &[])?;
        Ok(self.jobs.clone())
    }

    async fn create_savepoint(
        &self,
        job_id: &str,
        target_directory: Option<&str>,
    ) -> Result<CreateSavepointResponse> {
        self.record(
            "create_savepoint",
            &[job_id, target_directory.unwrap_or("-")],
        )?;
        Ok(CreateSavepointResponse {
            request_id: "request-id".to_string(),
        })
    }

    async fn monitor_savepoint_creation(
        &self,
        job_id: &str,
        request_id: &str,
    ) -> Result<MonitorSavepointCreationResponse> {
        self.record("monitor_savepoint_creation", &[job_id, request_id])?;

        let mut states = self.savepoint_states.lock().unwrap();
        let state = if states.len() > 1 {
            states.pop_front()
        } else {
            states.front().copied()
        }
        .unwrap_or(SavepointCreationStatus::Completed);

        Ok(MonitorSavepointCreationResponse {
            status: QueueStatus { id: state },
            operation: None,
        })
    }

    async fn terminate(&self, job_id: &str) -> Result<()> {
        self.record("terminate", &[job_id])
    }

    async fn upload_jar(&self, local_path: &str) -> Result<UploadJarResponse> {
        self.record("upload_jar", &[local_path])?;
        let file_name = local_path.rsplit('/').next().unwrap_or(local_path);
        Ok(UploadJarResponse {
            filename: format!("/tmp/flink-web-upload/0000_{}", file_name),
            status: "success".to_string(),
        })
    }

    async fn run_jar(
        &self,
        jar_id: &str,
        savepoint_path: Option<&str>,
        options: &RunOptions,
    ) -> Result<RunJarResponse> {
        self.record("run_jar", &[jar_id])?;
        self.run_requests.lock().unwrap().push((
            jar_id.to_string(),
            savepoint_path.map(str::to_string),
            options.clone(),
        ));
        Ok(RunJarResponse {
            job_id: "new-job".to_string(),
        })
    }
}
