//! Terminate command handler

use anyhow::Result;
use clap::Args;
use colored::*;
use tidewater_operator::{Operator, TerminateJob, TerminateTarget};

#[derive(Args, Debug)]
pub struct TerminateArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Take a savepoint before cancelling
    #[arg(long)]
    pub with_savepoint: bool,

    /// Where to write the savepoint; the cluster default when omitted
    #[arg(long)]
    pub savepoint_dir: Option<String>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Terminate the single running job with this name prefix
    #[arg(long)]
    pub job_name_base: Option<String>,

    /// Terminate this job
    #[arg(long)]
    pub job_id: Option<String>,
}

impl TargetArgs {
    fn into_target(self) -> Result<TerminateTarget> {
        match (self.job_name_base, self.job_id) {
            (Some(base), None) => Ok(TerminateTarget::JobNameBase(base)),
            (None, Some(id)) => Ok(TerminateTarget::JobId(id)),
            _ => anyhow::bail!("exactly one of --job-name-base or --job-id is required"),
        }
    }
}

pub async fn terminate(args: TerminateArgs, operator: &dyn Operator) -> Result<()> {
    operator
        .terminate(TerminateJob {
            target: args.target.into_target()?,
            with_savepoint: args.with_savepoint,
            savepoint_dir: args.savepoint_dir,
        })
        .await?;

    println!("{}", "✓ Job terminated".green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::RecordingOperator;

    #[tokio::test]
    async fn test_terminate_by_id() {
        let operator = RecordingOperator::default();

        terminate(
            TerminateArgs {
                target: TargetArgs {
                    job_name_base: None,
                    job_id: Some("a1b2".to_string()),
                },
                with_savepoint: true,
                savepoint_dir: None,
            },
            &operator,
        )
        .await
        .unwrap();

        let terminations = operator.terminations.lock().unwrap();
        assert_eq!(
            terminations[0].target,
            TerminateTarget::JobId("a1b2".to_string())
        );
        assert!(terminations[0].with_savepoint);
    }

    #[test]
    fn test_target_requires_exactly_one() {
        let both = TargetArgs {
            job_name_base: Some("etl".to_string()),
            job_id: Some("a1b2".to_string()),
        };
        assert!(both.into_target().is_err());
    }
}
