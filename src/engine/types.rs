//! Engine types
//!
//! Outcome and statistics types for the fetch engine.

use crate::error::Error;
use crate::pagination::StopReason;
use crate::types::Program;

/// How a fetch run ended
#[derive(Debug)]
pub enum FetchStop {
    /// The server signalled the end of data (or the page cap was hit)
    Finished(StopReason),
    /// A page request failed; earlier pages were kept
    Failed {
        /// Page number of the failed request
        page: u32,
        /// The failure
        error: Error,
    },
}

/// Result of a fetch run
///
/// Always carries the programs gathered before the run ended, even when a
/// page request failed.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Programs in delivery order
    pub programs: Vec<Program>,
    /// Why the run ended
    pub stop: FetchStop,
}

impl FetchOutcome {
    /// Check if every page was fetched successfully
    pub fn is_complete(&self) -> bool {
        matches!(self.stop, FetchStop::Finished(_))
    }

    /// The failure that ended the run, if any
    pub fn error(&self) -> Option<&Error> {
        match &self.stop {
            FetchStop::Failed { error, .. } => Some(error),
            FetchStop::Finished(_) => None,
        }
    }

    /// Check if the run ended because the credentials were rejected
    pub fn is_auth_failure(&self) -> bool {
        self.error().is_some_and(Error::is_auth_failure)
    }

    /// Take the programs out of the outcome
    pub fn into_programs(self) -> Vec<Program> {
        self.programs
    }
}

/// Statistics from a fetch operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Page requests sent
    pub requests: usize,
    /// Pages fetched successfully
    pub pages_fetched: usize,
    /// Total programs fetched
    pub records_fetched: usize,
    /// Failed page requests
    pub errors: usize,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl FetchStats {
    /// Count a sent request
    pub fn add_request(&mut self) {
        self.requests += 1;
    }

    /// Count a fetched page and its records
    pub fn add_page(&mut self, records: usize) {
        self.pages_fetched += 1;
        self.records_fetched += records;
    }

    /// Add an error
    pub fn add_error(&mut self) {
        self.errors += 1;
    }

    /// Set duration
    pub fn set_duration(&mut self, ms: u64) {
        self.duration_ms = ms;
    }
}
