//! Deploy command handler

use anyhow::Result;
use clap::Args;
use colored::*;
use tidewater_operator::{Deploy, Operator};

use super::RunArgs;

#[derive(Args, Debug)]
pub struct DeployArgs {
    /// Local jar to upload
    #[arg(long)]
    pub file_name: Option<String>,

    /// Jar already uploaded to the cluster
    #[arg(long, conflicts_with = "file_name")]
    pub remote_file_name: Option<String>,

    /// Restore from the newest savepoint in this directory
    #[arg(long)]
    pub savepoint_dir: Option<String>,

    /// Restore from this savepoint
    #[arg(long, conflicts_with = "savepoint_dir")]
    pub savepoint_path: Option<String>,

    #[command(flatten)]
    pub run: RunArgs,
}

pub async fn deploy(args: DeployArgs, operator: &dyn Operator) -> Result<()> {
    operator
        .deploy(Deploy {
            local_filename: args.file_name,
            remote_filename: args.remote_file_name,
            savepoint_dir: args.savepoint_dir,
            savepoint_path: args.savepoint_path,
            run: args.run.into(),
        })
        .await?;

    println!("{}", "✓ Job deployed".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::RecordingOperator;

    #[tokio::test]
    async fn test_deploy_passes_arguments_through() {
        let operator = RecordingOperator::default();

        deploy(
            DeployArgs {
                file_name: Some("job.jar".to_string()),
                remote_file_name: None,
                savepoint_dir: Some("/data/savepoints".to_string()),
                savepoint_path: None,
                run: RunArgs {
                    parallelism: Some(2),
                    ..Default::default()
                },
            },
            &operator,
        )
        .await
        .unwrap();

        let deploys = operator.deploys.lock().unwrap();
        assert_eq!(deploys[0].local_filename.as_deref(), Some("job.jar"));
        assert_eq!(deploys[0].savepoint_dir.as_deref(), Some("/data/savepoints"));
        assert_eq!(deploys[0].run.parallelism, Some(2));
    }
}
