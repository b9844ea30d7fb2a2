//! CLI runner - fetch, filter, write

use crate::cli::commands::Cli;
use crate::config::FetcherConfig;
use crate::engine::{FetchEngine, FetchStats};
use crate::error::Result;
use crate::filter::{filter_programs, ProgramType};
use crate::http::{HttpClient, HttpClientConfig};
use crate::output::{write_programs, WriteOutcome};
use tracing::{info, warn};

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Programs fetched from the API
    pub fetched: usize,
    /// Programs left after filtering
    pub kept: usize,
    /// Whether every page was fetched without error
    pub complete: bool,
    /// Whether the API rejected the credentials
    pub auth_failed: bool,
    /// What happened to the output file
    pub write: WriteOutcome,
    /// Fetch statistics
    pub stats: FetchStats,
}

/// CLI runner
pub struct Runner {
    config: FetcherConfig,
}

impl Runner {
    /// Create a new runner
    pub fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Create a runner from parsed arguments
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self::new(FetcherConfig::try_from(cli)?))
    }

    /// Fetch all programs, filter them, and save the result
    ///
    /// Fetch failures are logged and leave a partial result; only
    /// configuration and output errors are returned.
    pub async fn run(&self) -> Result<RunSummary> {
        self.config.validate()?;

        info!("Starting HackerOne program fetcher");

        let credentials = &self.config.credentials;
        if credentials.username().is_empty() || credentials.api_key().is_empty() {
            warn!("Username or API key is empty; the API will likely reject the request");
        }

        let http_config = HttpClientConfig::builder()
            .timeout(self.config.timeout)
            .build();
        let client = HttpClient::with_auth(http_config, credentials.clone())?;
        let mut engine = FetchEngine::new(client);

        let outcome = engine
            .fetch_all(&self.config.base_url, &self.config.paginator())
            .await;

        let fetched = outcome.programs.len();
        let complete = outcome.is_complete();
        let auth_failed = outcome.is_auth_failure();
        info!("Total programs fetched: {fetched}");

        let label = self.config.program_type.unwrap_or(ProgramType::All);
        let filtered = filter_programs(outcome.into_programs(), self.config.program_type);
        info!("Programs after filtering ({label}): {}", filtered.len());

        let write = write_programs(&self.config.output, &filtered)?;
        match write {
            WriteOutcome::Written(_) => {
                info!("Results saved to {}", self.config.output.display());
            }
            WriteOutcome::Skipped => warn!("No programs found matching the criteria."),
        }

        Ok(RunSummary {
            fetched,
            kept: filtered.len(),
            complete,
            auth_failed,
            write,
            stats: engine.stats().clone(),
        })
    }
}
