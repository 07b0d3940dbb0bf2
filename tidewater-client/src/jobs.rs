//! Job-related API endpoints

use reqwest::Method;
use tidewater_core::domain::job::Job;
use tidewater_core::dto::job::JobsOverview;

use crate::FlinkClient;
use crate::error::Result;

impl FlinkClient {
    /// List all jobs on the cluster
    pub async fn list_jobs(&self) -> Result<Vec<Job>> {
        let response = self.request(Method::GET, "/jobs/overview").send().await?;

        let overview: JobsOverview = self.handle_response(response).await?;
        Ok(overview.jobs)
    }

    /// Cancel a job
    ///
    /// # Arguments
    /// * `job_id` - The job to cancel
    pub async fn cancel_job(&self, job_id: &str) -> Result<()> {
        let response = self
            .request(Method::PATCH, &format!("/jobs/{}", job_id))
            .query(&[("mode", "cancel")])
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
