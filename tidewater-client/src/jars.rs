//! Jar-related API endpoints

use std::path::Path;

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use tidewater_core::dto::jar::{RunJarRequest, RunJarResponse, RunOptions, UploadJarResponse};
use tracing::info;

use crate::FlinkClient;
use crate::error::{ClientError, Result};

impl FlinkClient {
    /// Upload a local jar
    ///
    /// # Arguments
    /// * `local_path` - Path of the jar on this machine
    ///
    /// # Returns
    /// The cluster-side filename of the uploaded jar
    pub async fn upload_local_jar(&self, local_path: &str) -> Result<UploadJarResponse> {
        let file_name = Path::new(local_path)
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ClientError::InvalidRequest(format!("not a jar file path: {}", local_path))
            })?
            .to_string();

        let bytes = tokio::fs::read(local_path)
            .await
            .map_err(|source| ClientError::Io {
                path: local_path.to_string(),
                source,
            })?;

        info!("Uploading {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/x-java-archive")?;
        let form = Form::new().part("jarfile", part);

        let response = self
            .request(Method::POST, "/jars/upload")
            .multipart(form)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Start a job from an uploaded jar
    ///
    /// # Arguments
    /// * `jar_id` - Identifier of the uploaded jar
    /// * `savepoint_path` - Savepoint to restore from, if any
    /// * `options` - Entry class, arguments and parallelism
    pub async fn run_uploaded_jar(
        &self,
        jar_id: &str,
        savepoint_path: Option<&str>,
        options: &RunOptions,
    ) -> Result<RunJarResponse> {
        let response = self
            .request(Method::POST, &format!("/jars/{}/run", jar_id))
            .json(&RunJarRequest::new(
                options,
                savepoint_path.map(str::to_string),
            ))
            .send()
            .await?;

        self.handle_response(response).await
    }
}
