use crate::workflow::launch;
use anyhow::Result;
use clap::Parser;

mod card;
mod cli;
mod config;
mod exporter;
mod github;
mod synthesizer;
mod types;
mod utils;
mod workflow;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let config = args.into_config();

    launch(&config).await
}
