//! Savepoint creation monitoring
//!
//! Savepoints are created asynchronously by the cluster. The monitor polls the
//! request's status on a fixed interval until it reaches a terminal state or
//! the deadline passes.

use std::time::Duration;

use tidewater_client::ClusterApi;
use tidewater_core::domain::savepoint::{SavepointCreationHandle, SavepointCreationStatus};
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::{OperatorError, Result};

/// Wait for a savepoint request to complete
///
/// # Errors
/// - `SavepointFailed` as soon as the cluster reports failure
/// - the client error, unchanged, if a status call fails
/// - `SavepointTimeout` once `timeout` has elapsed without a terminal state
pub async fn await_savepoint(
    cluster: &dyn ClusterApi,
    handle: &SavepointCreationHandle,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<()> {
    let deadline = Instant::now() + timeout;

    loop {
        let response = cluster
            .monitor_savepoint_creation(&handle.job_id, &handle.request_id)
            .await?;

        match response.state() {
            SavepointCreationStatus::Completed => {
                info!(
                    "Savepoint for job {} completed{}",
                    handle.job_id,
                    response
                        .location()
                        .map(|l| format!(" at {}", l))
                        .unwrap_or_default()
                );
                return Ok(());
            }
            SavepointCreationStatus::Failed => {
                return Err(OperatorError::SavepointFailed {
                    job_id: handle.job_id.clone(),
                    cause: response
                        .failure_cause()
                        .unwrap_or_else(|| "unknown cause".to_string()),
                });
            }
            SavepointCreationStatus::InProgress => {
                debug!("Savepoint for job {} still in progress", handle.job_id);
            }
        }

        let now = Instant::now();
        if now >= deadline {
            return Err(OperatorError::SavepointTimeout {
                job_id: handle.job_id.clone(),
                timeout_secs: timeout.as_secs(),
            });
        }

        tokio::time::sleep(poll_interval.min(deadline - now)).await;
    }
}
