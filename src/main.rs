// Allow common clippy pedantic lints
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]

//! HackerOne program fetcher CLI
//!
//! Fetches every program visible to the given API credentials, filters them
//! by type, and writes the result as JSON.

use clap::Parser;
use hackerone_fetcher::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .init();

    let result = match Runner::from_cli(&cli) {
        Ok(runner) => runner.run().await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
