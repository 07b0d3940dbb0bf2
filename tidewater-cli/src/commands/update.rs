//! Update command handler

use anyhow::Result;
use clap::Args;
use colored::*;
use tidewater_operator::{Operator, UpdateJob};

use super::RunArgs;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Name prefix shared by all versions of the job
    #[arg(long, default_value = "")]
    pub job_name_base: String,

    /// Local jar of the new version
    #[arg(long, required = true)]
    pub file_name: String,

    /// Directory savepoints are written to and restored from
    #[arg(long, default_value = "")]
    pub savepoint_dir: String,

    /// Deploy from the newest savepoint when no instance is running
    #[arg(long)]
    pub fallback_to_deploy: bool,

    #[command(flatten)]
    pub run: RunArgs,
}

pub async fn update(args: UpdateArgs, operator: &dyn Operator) -> Result<()> {
    let base = args.job_name_base.clone();

    operator
        .update(UpdateJob {
            job_name_base: args.job_name_base,
            local_filename: args.file_name,
            savepoint_dir: args.savepoint_dir,
            fallback_to_deploy: args.fallback_to_deploy,
            run: args.run.into(),
        })
        .await?;

    println!("{}", format!("✓ Job \"{}\" updated", base).green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::RecordingOperator;

    #[tokio::test]
    async fn test_missing_arguments_reach_the_operator() {
        let operator = RecordingOperator::default();

        update(
            UpdateArgs {
                job_name_base: String::new(),
                file_name: "job.jar".to_string(),
                savepoint_dir: String::new(),
                fallback_to_deploy: true,
                run: RunArgs::default(),
            },
            &operator,
        )
        .await
        .unwrap();

        let updates = operator.updates.lock().unwrap();
        assert!(updates[0].job_name_base.is_empty());
        assert!(updates[0].fallback_to_deploy);
    }
}
