//! Run configuration
//!
//! `FetcherConfig` is the validated configuration for one fetch run:
//! credentials, category filter, output destination, and the listing
//! endpoint with its paging limits. It is built from the command line
//! (see [`crate::cli::Cli`]) or programmatically with the builder.

use crate::auth::Credentials;
use crate::error::{Error, Result};
use crate::filter::ProgramType;
use crate::pagination::{PageNumberPaginator, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Listing endpoint for programs visible to the authenticated hacker
pub const DEFAULT_BASE_URL: &str = "https://api.hackerone.com/v1/hackers/programs";

/// Default output file
pub const DEFAULT_OUTPUT: &str = "programs.json";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for a fetch run
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Basic auth credential pair
    pub credentials: Credentials,
    /// Category filter (`None` keeps everything)
    pub program_type: Option<ProgramType>,
    /// Output file path
    pub output: PathBuf,
    /// Listing endpoint
    pub base_url: String,
    /// Records requested per page
    pub page_size: u32,
    /// Maximum pages requested in one run
    pub max_pages: u32,
    /// Per-request timeout
    pub timeout: Duration,
}

impl FetcherConfig {
    /// Create a config with defaults for everything but the credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            program_type: Some(ProgramType::All),
            output: PathBuf::from(DEFAULT_OUTPUT),
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the category filter
    #[must_use]
    pub fn with_program_type(mut self, program_type: Option<ProgramType>) -> Self {
        self.program_type = program_type;
        self
    }

    /// Set the output path
    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Set the listing endpoint
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the page cap
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the configuration before any request is made
    ///
    /// Credentials are not checked here: a rejected pair is reported by the
    /// API as a 401 and handled like any other auth failure.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                "base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }

        if self.page_size == 0 {
            return Err(Error::invalid_value("page_size", "must be at least 1"));
        }
        if self.max_pages == 0 {
            return Err(Error::invalid_value("max_pages", "must be at least 1"));
        }
        if self.timeout.is_zero() {
            return Err(Error::invalid_value("timeout", "must be at least 1 second"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(Error::invalid_value("output", "must not be empty"));
        }

        Ok(())
    }

    /// Paginator matching this configuration
    pub fn paginator(&self) -> PageNumberPaginator {
        PageNumberPaginator::new(self.page_size).with_max_pages(self.max_pages)
    }
}
