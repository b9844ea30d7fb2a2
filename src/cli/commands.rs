//! CLI argument parsing

use crate::auth::Credentials;
use crate::config::{FetcherConfig, DEFAULT_BASE_URL, DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECS};
use crate::error::{Error, Result};
use crate::filter::ProgramType;
use crate::pagination::DEFAULT_MAX_PAGES;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Fetch HackerOne programs
#[derive(Parser, Debug)]
#[command(name = "hackerone-fetcher")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// HackerOne API username (identifier)
    pub username: String,

    /// HackerOne API key (token)
    pub api_key: String,

    /// Filter programs by type
    #[arg(long = "type", value_enum, default_value_t = ProgramType::All)]
    pub program_type: ProgramType,

    /// Output JSON file name
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Listing endpoint
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Stop after this many pages even if the server keeps returning full pages
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter for this run, honoring `RUST_LOG` when it is set
    pub fn log_filter(&self) -> EnvFilter {
        log_filter(self.verbose, std::env::var("RUST_LOG").ok().as_deref())
    }
}

/// Build the log filter from `--verbose` and an optional `RUST_LOG` value
///
/// A parseable `RUST_LOG` replaces the CLI level entirely; otherwise the
/// level is `debug` with `--verbose` and `info` without.
pub fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    EnvFilter::default().add_directive(level.into())
}

impl TryFrom<&Cli> for FetcherConfig {
    type Error = Error;

    fn try_from(cli: &Cli) -> Result<Self> {
        let config = FetcherConfig::new(Credentials::new(&cli.username, &cli.api_key))
            .with_program_type(Some(cli.program_type))
            .with_output(&cli.output)
            .with_base_url(&cli.base_url)
            .with_max_pages(cli.max_pages)
            .with_timeout(Duration::from_secs(cli.timeout));

        config.validate()?;
        Ok(config)
    }
}
