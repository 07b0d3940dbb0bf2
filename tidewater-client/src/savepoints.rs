//! Savepoint-related API endpoints

use reqwest::Method;
use tidewater_core::dto::savepoint::{
    CreateSavepointResponse, MonitorSavepointCreationResponse, TriggerSavepointRequest,
};

use crate::FlinkClient;
use crate::error::Result;

impl FlinkClient {
    /// Trigger an asynchronous savepoint
    ///
    /// # Arguments
    /// * `job_id` - The job to snapshot
    /// * `target_directory` - Directory to write into; the cluster default when `None`
    ///
    /// # Returns
    /// The request id to poll with [`FlinkClient::savepoint_status`]
    pub async fn trigger_savepoint(
        &self,
        job_id: &str,
        target_directory: Option<&str>,
    ) -> Result<CreateSavepointResponse> {
        let response = self
            .request(Method::POST, &format!("/jobs/{}/savepoints", job_id))
            .json(&TriggerSavepointRequest {
                target_directory: target_directory.map(str::to_string),
                cancel_job: false,
            })
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Read the status of a savepoint request
    pub async fn savepoint_status(
        &self,
        job_id: &str,
        request_id: &str,
    ) -> Result<MonitorSavepointCreationResponse> {
        let response = self
            .request(
                Method::GET,
                &format!("/jobs/{}/savepoints/{}", job_id, request_id),
            )
            .send()
            .await?;

        self.handle_response(response).await
    }
}
