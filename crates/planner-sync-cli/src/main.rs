use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use planner_sync_cli::{config, remote, run};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "planner-sync")]
#[command(about = "Reconcile planner report files and queue a refresh per planner")]
struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let app_config = config::load_config(cli.config.as_deref())?;
    let connection = remote::RemoteOrchestrator::from_config(&app_config);

    let report = run::process(&connection).await?;

    println!(
        "Run complete: {} stale report(s) deleted, {} element(s) queued.",
        report.deleted.len(),
        report.enqueued
    );

    Ok(())
}
