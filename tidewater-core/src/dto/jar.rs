//! Jar DTOs

use serde::{Deserialize, Serialize};

/// Response of `POST /jars/upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadJarResponse {
    /// Path of the jar on the cluster
    pub filename: String,
    pub status: String,
}

impl UploadJarResponse {
    /// Identifier used to run the uploaded jar: the last segment of its path
    pub fn jar_id(&self) -> &str {
        jar_id_from_filename(&self.filename)
    }
}

/// Extract a jar id from a cluster-side jar path
pub fn jar_id_from_filename(filename: &str) -> &str {
    filename.rsplit('/').next().unwrap_or(filename)
}

/// Options for starting a job from an uploaded jar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunOptions {
    pub entry_class: Option<String>,
    pub program_args: Option<String>,
    pub parallelism: Option<u32>,
    pub allow_non_restored_state: bool,
}

/// Body of `POST /jars/{jar_id}/run`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunJarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_args: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallelism: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savepoint_path: Option<String>,
    pub allow_non_restored_state: bool,
}

impl RunJarRequest {
    pub fn new(options: &RunOptions, savepoint_path: Option<String>) -> Self {
        Self {
            entry_class: options.entry_class.clone(),
            program_args: options.program_args.clone(),
            parallelism: options.parallelism,
            savepoint_path,
            allow_non_restored_state: options.allow_non_restored_state,
        }
    }
}

/// Response of `POST /jars/{jar_id}/run`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunJarResponse {
    #[serde(rename = "jobid")]
    pub job_id: String,
}
