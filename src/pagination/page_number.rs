//! Page number pagination
//!
//! Uses a 1-based page number and a fixed page size. The listing API
//! follows the JSON:API convention: `?page[number]=2&page[size]=100`.

use super::types::{NextPage, PaginationState, Paginator, QueryParams, StopReason};

/// Query parameter carrying the page number
pub const PAGE_NUMBER_PARAM: &str = "page[number]";

/// Query parameter carrying the page size
pub const PAGE_SIZE_PARAM: &str = "page[size]";

/// Records requested per page
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Upper bound on pages requested in one run
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Page number pagination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNumberPaginator {
    /// Page size value
    pub page_size: u32,
    /// Maximum number of pages to request
    pub max_pages: u32,
}

impl Default for PageNumberPaginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageNumberPaginator {
    /// Create a paginator requesting `page_size` records per page
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Cap the number of pages requested
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl Paginator for PageNumberPaginator {
    fn initial_state(&self) -> PaginationState {
        PaginationState::with_page(1)
    }

    fn params(&self, state: &PaginationState) -> QueryParams {
        vec![
            (PAGE_NUMBER_PARAM.to_string(), state.page.to_string()),
            (PAGE_SIZE_PARAM.to_string(), self.page_size.to_string()),
        ]
    }

    fn process_page(&self, records_count: usize, state: &mut PaginationState) -> NextPage {
        state.add_page();

        let reason = if records_count == 0 {
            Some(StopReason::EmptyPage)
        } else if records_count < self.page_size as usize {
            Some(StopReason::ShortPage)
        } else if state.pages_fetched >= self.max_pages {
            Some(StopReason::PageLimit)
        } else {
            None
        };

        if let Some(reason) = reason {
            return NextPage::Done(reason);
        }

        state.next_page();
        NextPage::with_params(self.params(state))
    }
}
