//! HTTP client module
//!
//! Thin wrapper over reqwest that applies credentials, default headers and
//! query parameters, and turns error statuses into [`crate::Error`] values.
//!
//! Requests are never retried: a failed request is reported to the caller,
//! which decides what to do with the records gathered so far.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
