//! Pagination module
//!
//! Page number pagination for listing endpoints.
//!
//! # Overview
//!
//! A [`Paginator`] produces the query parameters for each page and decides,
//! from the number of records a page returned, whether another page should
//! be requested. The listing API does not send an explicit "has next" flag,
//! so the end of data is inferred: an empty page, or a page shorter than
//! the requested page size, is the last one. A page cap bounds the loop in
//! case the server keeps returning full pages.

mod page_number;
mod types;

pub use page_number::{
    PageNumberPaginator, DEFAULT_MAX_PAGES, DEFAULT_PAGE_SIZE, PAGE_NUMBER_PARAM, PAGE_SIZE_PARAM,
};
pub use types::{NextPage, PaginationState, Paginator, QueryParams, StopReason};
