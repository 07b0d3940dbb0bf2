//! Update operation
//!
//! Validate → fetch jobs → select the single running instance → savepoint →
//! cancel → resolve the savepoint → upload → run. Any failure stops the
//! sequence. Once the old job has been cancelled nothing is rolled back; a
//! later failure leaves the family with no running instance.

use tracing::{info, warn};

use super::{ClusterOperator, Deploy, UpdateJob};
use crate::error::{OperatorError, Result};
use crate::matcher::filter_running_jobs;

const ACTION: &str = "update";

impl ClusterOperator {
    pub(super) async fn update_job(&self, update: UpdateJob) -> Result<()> {
        if update.job_name_base.is_empty() {
            return Err(OperatorError::MissingArgument("JobNameBase"));
        }
        if update.savepoint_dir.is_empty() {
            return Err(OperatorError::MissingArgument("SavepointDir"));
        }

        let jobs = self.fetch_jobs().await?;
        let mut running = filter_running_jobs(jobs, &update.job_name_base);

        let target = match running.len() {
            0 if update.fallback_to_deploy => {
                warn!(
                    "No instance running for \"{}\", falling back to deploy",
                    update.job_name_base
                );
                return self
                    .deploy_job(Deploy {
                        local_filename: Some(update.local_filename),
                        remote_filename: None,
                        savepoint_dir: Some(update.savepoint_dir),
                        savepoint_path: None,
                        run: update.run,
                    })
                    .await;
            }
            0 => {
                return Err(OperatorError::NoRunningInstance {
                    base: update.job_name_base,
                    action: ACTION,
                });
            }
            1 => running.remove(0),
            count => {
                return Err(OperatorError::MultipleRunningInstances {
                    base: update.job_name_base,
                    count,
                    action: ACTION,
                });
            }
        };

        info!("Updating job {} ({})", target.id, target.name);

        self.savepoint_job(&target.id, Some(update.savepoint_dir.as_str()))
            .await?;
        self.cancel_job(&target.id).await?;

        let savepoint_path = self
            .resolver
            .resolve_latest(&update.savepoint_dir)
            .await
            .map_err(OperatorError::LatestSavepoint)?;

        let uploaded = self.cluster.upload_jar(&update.local_filename).await?;
        info!("Uploaded {} as {}", update.local_filename, uploaded.filename);

        let started = self
            .cluster
            .run_jar(uploaded.jar_id(), Some(savepoint_path.as_str()), &update.run)
            .await?;
        info!(
            "Job {} replaced by {} from savepoint {}",
            target.id, started.job_id, savepoint_path
        );

        Ok(())
    }
}
