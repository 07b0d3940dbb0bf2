//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod deploy;
mod list;
mod terminate;
mod update;

pub use deploy::DeployArgs;
pub use terminate::TerminateArgs;
pub use update::UpdateArgs;

use anyhow::Result;
use clap::{Args, Subcommand};
use tidewater_core::dto::jar::RunOptions;
use tidewater_operator::Operator;

/// Top-level CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List jobs on the cluster
    List,
    /// Upload a jar and start it
    Deploy(DeployArgs),
    /// Replace the running job of a family, carrying its state over
    Update(UpdateArgs),
    /// Cancel a job
    Terminate(TerminateArgs),
}

/// Options passed to the started job
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Main class of the job
    #[arg(long)]
    pub entry_class: Option<String>,

    /// Arguments passed to the job's main method
    #[arg(long, allow_hyphen_values = true)]
    pub program_args: Option<String>,

    #[arg(long)]
    pub parallelism: Option<u32>,

    /// Start even if some savepoint state cannot be mapped to the new job
    #[arg(long)]
    pub allow_non_restored_state: bool,
}

impl From<RunArgs> for RunOptions {
    fn from(args: RunArgs) -> Self {
        Self {
            entry_class: args.entry_class,
            program_args: args.program_args,
            parallelism: args.parallelism,
            allow_non_restored_state: args.allow_non_restored_state,
        }
    }
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `operator` - The operator performing it
pub async fn handle_command(command: Commands, operator: &dyn Operator) -> Result<()> {
    match command {
        Commands::List => list::list_jobs(operator).await,
        Commands::Deploy(args) => deploy::deploy(args, operator).await,
        Commands::Update(args) => update::update(args, operator).await,
        Commands::Terminate(args) => terminate::terminate(args, operator).await,
    }
}
