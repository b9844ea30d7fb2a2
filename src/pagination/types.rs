//! Pagination types and traits
//!
//! Defines the core pagination abstractions.

use std::fmt;

/// Ordered query parameters for a page request
pub type QueryParams = Vec<(String, String)>;

/// Why pagination ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The last page had no records
    EmptyPage,
    /// The last page had fewer records than the page size
    ShortPage,
    /// The page cap was reached while pages were still full
    PageLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPage => write!(f, "empty page"),
            Self::ShortPage => write!(f, "short page"),
            Self::PageLimit => write!(f, "page limit reached"),
        }
    }
}

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// More pages available with these parameters
    Continue {
        /// Query parameters for the next request
        query_params: QueryParams,
    },
    /// No more pages
    Done(StopReason),
}

impl NextPage {
    /// Create a continuation with query parameters
    pub fn with_params(query_params: QueryParams) -> Self {
        Self::Continue { query_params }
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Page number of the next request
    pub page: u32,
    /// Pages processed so far
    pub pages_fetched: u32,
}

impl PaginationState {
    /// Create state with a starting page
    pub fn with_page(page: u32) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Record a processed page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// State for the first request
    fn initial_state(&self) -> PaginationState;

    /// Query parameters for the page the state points at
    fn params(&self, state: &PaginationState) -> QueryParams;

    /// Process a fetched page and determine if there's a next page
    fn process_page(&self, records_count: usize, state: &mut PaginationState) -> NextPage;
}
