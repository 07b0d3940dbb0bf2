//! Job family matching
//!
//! A job family shares a base name across versioned deployments, e.g.
//! `WordCount v1.0` and `WordCount v1.1` both belong to `WordCount`.

use tidewater_core::domain::job::Job;

/// Keep the running jobs whose name starts with `base_name`
///
/// Input order is preserved. The match is a plain prefix match, so base
/// `job` also matches `jobXYZ`.
pub fn filter_running_jobs(jobs: Vec<Job>, base_name: &str) -> Vec<Job> {
    jobs.into_iter()
        .filter(|job| job.is_running() && job.name.starts_with(base_name))
        .collect()
}
