//! List command handler

use anyhow::Result;
use colored::*;
use tidewater_core::domain::job::{Job, JobStatus};
use tidewater_operator::Operator;

/// List all jobs
pub async fn list_jobs(operator: &dyn Operator) -> Result<()> {
    let jobs = operator.retrieve_jobs().await?;

    if jobs.is_empty() {
        println!("{}", "No jobs found.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} job(s):", jobs.len()).bold());
    println!();
    for job in &jobs {
        print_job_summary(job);
    }

    Ok(())
}

fn print_job_summary(job: &Job) {
    println!("  {} {}", "▸".cyan(), job.name.bold());
    println!("    ID:      {}", job.id.dimmed());
    println!("    Status:  {}", colorize_status(&job.status));
    if let Some(started) = job.started_at() {
        println!(
            "    Started: {}",
            started.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
    }
    println!();
}

/// Colorize job status for display
fn colorize_status(status: &JobStatus) -> ColoredString {
    let status_str = status.to_string();
    match status {
        JobStatus::Running => status_str.green(),
        JobStatus::Failed | JobStatus::Failing => status_str.red(),
        JobStatus::Canceled | JobStatus::Cancelling | JobStatus::Finished => status_str.dimmed(),
        JobStatus::Unknown => status_str.normal(),
        _ => status_str.yellow(),
    }
}
