//! Execution engine module
//!
//! The page loop: requests pages one after another, aggregates their
//! programs in delivery order, and stops on the end-of-data signal, the
//! page cap, or the first failed request.
//!
//! A failed request never discards what was already fetched. The failure
//! is logged (with an extra hint for rejected credentials) and returned in
//! the [`FetchOutcome`] next to the partial result.

mod types;

pub use types::{FetchOutcome, FetchStats, FetchStop};

use crate::decode::JsonDecoder;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::pagination::{NextPage, Paginator, StopReason};
use crate::types::Program;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Fetch engine for paginated listings
pub struct FetchEngine {
    /// HTTP client
    client: HttpClient,
    /// Listing body decoder
    decoder: JsonDecoder,
    /// Statistics
    stats: FetchStats,
}

impl FetchEngine {
    /// Create a new fetch engine
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            decoder: JsonDecoder::new(),
            stats: FetchStats::default(),
        }
    }

    /// Get statistics
    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// Fetch every page of a listing
    pub async fn fetch_all(&mut self, url: &str, paginator: &dyn Paginator) -> FetchOutcome {
        let start = Instant::now();
        let mut programs = Vec::new();
        let mut state = paginator.initial_state();
        let mut params = paginator.params(&state);

        let stop = loop {
            let page = state.page;
            info!("Fetching page {page}...");

            self.stats.add_request();
            let records = match self.fetch_page(url, &params).await {
                Ok(records) => records,
                Err(error) => {
                    self.stats.add_error();
                    report_failure(page, &error);
                    break FetchStop::Failed { page, error };
                }
            };

            let record_count = records.len();
            self.stats.add_page(record_count);
            debug!("Page {page}: fetched {record_count} programs");
            programs.extend(records);

            match paginator.process_page(record_count, &mut state) {
                NextPage::Continue { query_params } => params = query_params,
                NextPage::Done(reason) => {
                    if reason == StopReason::PageLimit {
                        warn!(
                            "Stopped after {} pages: page limit reached while pages were still full",
                            state.pages_fetched
                        );
                    } else {
                        debug!("Pagination finished on page {page}: {reason}");
                    }
                    break FetchStop::Finished(reason);
                }
            }
        };

        self.stats.set_duration(start.elapsed().as_millis() as u64);

        FetchOutcome { programs, stop }
    }

    /// Request one page and decode its programs
    async fn fetch_page(&self, url: &str, params: &[(String, String)]) -> Result<Vec<Program>> {
        let req_config = params
            .iter()
            .fold(RequestConfig::new(), |req, (key, value)| req.query(key, value));

        let body: Value = self.client.get_json_with_config(url, req_config).await?;
        self.decoder.extract_records(body)
    }
}

/// Log a failed page request
fn report_failure(page: u32, err: &Error) {
    error!("Error fetching programs on page {page}: {err}");
    if err.is_auth_failure() {
        error!("Authentication failed. Please check your username and API key.");
    }
}

#[cfg(test)]
mod tests;
