//! Operator errors

use thiserror::Error;
use tidewater_client::ClientError;

use crate::storage::StorageError;

/// Result type alias for operator operations
pub type Result<T> = std::result::Result<T, OperatorError>;

/// Errors surfaced by deploy, update and terminate
///
/// Every variant carries the job id, base name or directory needed to act on
/// it without re-reading cluster state.
#[derive(Debug, Error)]
pub enum OperatorError {
    #[error("unspecified argument '{0}'")]
    MissingArgument(&'static str),

    #[error("unspecified argument 'LocalFilename' or 'RemoteFilename'")]
    MissingArtifact,

    #[error("retrieving jobs failed: {0}")]
    RetrieveJobs(#[source] ClientError),

    #[error("no instance running for job name base \"{base}\". Aborting {action}")]
    NoRunningInstance { base: String, action: &'static str },

    #[error("job name with base \"{base}\" has {count} instances running. Aborting {action}")]
    MultipleRunningInstances {
        base: String,
        count: usize,
        action: &'static str,
    },

    #[error("failed to create savepoint for job {job_id} due to error: {source}")]
    CreateSavepoint {
        job_id: String,
        #[source]
        source: ClientError,
    },

    #[error("failed to create savepoint for job \"{job_id}\" within {timeout_secs} seconds")]
    SavepointTimeout { job_id: String, timeout_secs: u64 },

    #[error("savepoint creation for job \"{job_id}\" failed: {cause}")]
    SavepointFailed { job_id: String, cause: String },

    #[error("job \"{job_id}\" failed to cancel due to: {source}")]
    Cancel {
        job_id: String,
        #[source]
        source: ClientError,
    },

    #[error("retrieving the latest savepoint failed: {0}")]
    LatestSavepoint(#[source] StorageError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Broad category of an [`OperatorError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument was missing; nothing was sent to the cluster
    Validation,
    /// Listing jobs or savepoint entries failed
    Retrieval,
    /// No savepoint exists in the directory
    NotFound,
    /// Zero or several running instances where exactly one was required
    Ambiguity,
    /// The cluster rejected a savepoint, cancel, upload or run
    OperationFailed,
    Timeout,
}

impl OperatorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingArgument(_) | Self::MissingArtifact => ErrorKind::Validation,
            Self::RetrieveJobs(_) => ErrorKind::Retrieval,
            Self::LatestSavepoint(StorageError::NoSavepoints(_)) => ErrorKind::NotFound,
            Self::LatestSavepoint(_) => ErrorKind::Retrieval,
            Self::NoRunningInstance { .. } | Self::MultipleRunningInstances { .. } => {
                ErrorKind::Ambiguity
            }
            Self::SavepointTimeout { .. } => ErrorKind::Timeout,
            Self::CreateSavepoint { .. }
            | Self::SavepointFailed { .. }
            | Self::Cancel { .. }
            | Self::Client(_) => ErrorKind::OperationFailed,
        }
    }
}
