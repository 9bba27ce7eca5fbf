use crate::comparison::workflow::launch;
use anyhow::Result;
use clap::Parser;

mod cli;
mod comparison;
mod config;
mod geo;
mod llm;
mod outlet;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let request = args.request();
    let config = args.into_config();

    launch(&config, &request).await
}
