//! Savepoint domain types

use serde::{Deserialize, Serialize};

/// Correlates an asynchronous savepoint request with its status endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavepointCreationHandle {
    pub job_id: String,
    pub request_id: String,
}

/// State of a savepoint creation request
///
/// `Completed` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SavepointCreationStatus {
    InProgress,
    Completed,
    Failed,
}

