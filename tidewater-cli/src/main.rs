//! Tidewater CLI
//!
//! Command-line interface for deploying, updating and terminating jobs on a
//! stream-processing cluster.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "tidewater")]
#[command(about = "Stream-processing job deployer", long_about = None)]
struct Cli {
    /// Cluster REST API URL
    #[arg(long, env = "FLINK_BASE_URL", default_value = "http://localhost:8081")]
    flink_url: String,

    /// Basic auth username for the cluster API
    #[arg(long, env = "FLINK_BASIC_AUTH_USERNAME")]
    flink_username: Option<String>,

    /// Basic auth password for the cluster API
    #[arg(long, env = "FLINK_BASIC_AUTH_PASSWORD", hide_env_values = true)]
    flink_password: Option<String>,

    /// Timeout for a single API request, in seconds
    #[arg(long, env = "FLINK_API_TIMEOUT_SECONDS")]
    api_timeout: Option<u64>,

    /// How long to wait for a savepoint, in seconds
    #[arg(long, env = "SAVEPOINT_TIMEOUT_SECONDS", default_value_t = 60)]
    savepoint_timeout: u64,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "tidewater=debug"
    } else {
        "tidewater=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_args(
        cli.flink_url,
        cli.flink_username,
        cli.flink_password,
        cli.api_timeout,
        cli.savepoint_timeout,
    );
    config.validate()?;
    debug!("Using cluster at {}", config.flink_url);

    let operator = config.operator()?;
    handle_command(cli.command, &operator).await
}
