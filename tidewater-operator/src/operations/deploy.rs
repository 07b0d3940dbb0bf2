//! Deploy operation

use tidewater_core::dto::jar::jar_id_from_filename;
use tracing::info;

use super::{ClusterOperator, Deploy};
use crate::error::{OperatorError, Result};

impl ClusterOperator {
    pub(super) async fn deploy_job(&self, deploy: Deploy) -> Result<()> {
        let mut savepoint_path = deploy.savepoint_path.filter(|p| !p.is_empty());

        if let Some(dir) = deploy.savepoint_dir.as_deref().filter(|d| !d.is_empty()) {
            let latest = self
                .resolver
                .resolve_latest(dir)
                .await
                .map_err(OperatorError::LatestSavepoint)?;
            savepoint_path = Some(latest);
        }

        let local = deploy.local_filename.filter(|f| !f.is_empty());
        let remote = deploy.remote_filename.filter(|f| !f.is_empty());

        let jar_id = match (local, remote) {
            (Some(local), _) => {
                let uploaded = self.cluster.upload_jar(&local).await?;
                info!("Uploaded {} as {}", local, uploaded.filename);
                uploaded.jar_id().to_string()
            }
            (None, Some(remote)) => jar_id_from_filename(&remote).to_string(),
            (None, None) => return Err(OperatorError::MissingArtifact),
        };

        match &savepoint_path {
            Some(path) => info!("Starting {} from savepoint {}", jar_id, path),
            None => info!("Starting {} without a savepoint", jar_id),
        }

        let started = self
            .cluster
            .run_jar(&jar_id, savepoint_path.as_deref(), &deploy.run)
            .await?;
        info!("Job {} started", started.job_id);

        Ok(())
    }
}
