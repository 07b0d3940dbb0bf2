//! Job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::Job;

/// Response of `GET /jobs/overview`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobsOverview {
    #[serde(default)]
    pub jobs: Vec<Job>,
}
