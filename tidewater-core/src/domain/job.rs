//! Job domain types

use serde::{Deserialize, Serialize};

/// A job as reported by the cluster's jobs overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "jid")]
    pub id: String,
    pub name: String,
    #[serde(rename = "state")]
    pub status: JobStatus,
    /// Start time in milliseconds since the epoch
    #[serde(rename = "start-time", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
}

impl Job {
    /// Start time of the job, when the cluster reported one
    pub fn started_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.start_time
            .filter(|millis| *millis > 0)
            .and_then(chrono::DateTime::from_timestamp_millis)
    }

    pub fn is_running(&self) -> bool {
        self.status == JobStatus::Running
    }
}

/// Job state as the cluster names it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Initializing,
    Created,
    Running,
    Failing,
    Failed,
    Cancelling,
    Canceled,
    Finished,
    Restarting,
    Suspended,
    Reconciling,
    /// Any state this deployer does not know about
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            JobStatus::Initializing => "INITIALIZING",
            JobStatus::Created => "CREATED",
            JobStatus::Running => "RUNNING",
            JobStatus::Failing => "FAILING",
            JobStatus::Failed => "FAILED",
            JobStatus::Cancelling => "CANCELLING",
            JobStatus::Canceled => "CANCELED",
            JobStatus::Finished => "FINISHED",
            JobStatus::Restarting => "RESTARTING",
            JobStatus::Suspended => "SUSPENDED",
            JobStatus::Reconciling => "RECONCILING",
            JobStatus::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}
