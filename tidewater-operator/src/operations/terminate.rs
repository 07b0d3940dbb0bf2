//! Terminate operation

use tracing::info;

use super::{ClusterOperator, TerminateJob, TerminateTarget};
use crate::error::{OperatorError, Result};
use crate::matcher::filter_running_jobs;

const ACTION: &str = "terminate";

impl ClusterOperator {
    pub(super) async fn terminate_job(&self, terminate: TerminateJob) -> Result<()> {
        let job_id = match terminate.target {
            TerminateTarget::JobId(id) if id.is_empty() => {
                return Err(OperatorError::MissingArgument("JobID"));
            }
            TerminateTarget::JobId(id) => id,
            TerminateTarget::JobNameBase(base) if base.is_empty() => {
                return Err(OperatorError::MissingArgument("JobNameBase"));
            }
            TerminateTarget::JobNameBase(base) => self.find_single_running(base).await?,
        };

        if terminate.with_savepoint {
            self.savepoint_job(&job_id, terminate.savepoint_dir.as_deref())
                .await?;
        }

        self.cancel_job(&job_id).await?;
        info!("Job {} terminated", job_id);

        Ok(())
    }

    async fn find_single_running(&self, base: String) -> Result<String> {
        let jobs = self.fetch_jobs().await?;
        let mut running = filter_running_jobs(jobs, &base);

        match running.len() {
            0 => Err(OperatorError::NoRunningInstance {
                base,
                action: ACTION,
            }),
            1 => Ok(running.remove(0).id),
            count => Err(OperatorError::MultipleRunningInstances {
                base,
                count,
                action: ACTION,
            }),
        }
    }
}
