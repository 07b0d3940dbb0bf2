//! Operation inputs

use tidewater_core::dto::jar::RunOptions;

/// Start a job from an artifact
#[derive(Debug, Clone, Default)]
pub struct Deploy {
    /// Jar on this machine to upload
    pub local_filename: Option<String>,
    /// Jar already uploaded to the cluster; used when no local jar is given
    pub remote_filename: Option<String>,
    /// Directory to restore the newest savepoint from; wins over `savepoint_path`
    pub savepoint_dir: Option<String>,
    /// Exact savepoint to restore from
    pub savepoint_path: Option<String>,
    pub run: RunOptions,
}

/// Replace the running instance of a job family
#[derive(Debug, Clone, Default)]
pub struct UpdateJob {
    pub job_name_base: String,
    pub local_filename: String,
    pub savepoint_dir: String,
    /// Deploy instead of failing when no instance is running
    pub fallback_to_deploy: bool,
    pub run: RunOptions,
}

/// Which job to terminate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminateTarget {
    /// The single running job of this family
    JobNameBase(String),
    JobId(String),
}

/// Cancel a job
#[derive(Debug, Clone)]
pub struct TerminateJob {
    pub target: TerminateTarget,
    /// Take a savepoint before cancelling
    pub with_savepoint: bool,
    /// Where the savepoint goes; the cluster default when `None`
    pub savepoint_dir: Option<String>,
}
