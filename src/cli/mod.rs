//! CLI module
//!
//! Command-line interface: parses arguments into a [`crate::config::FetcherConfig`]
//! and runs fetch → filter → write.

mod commands;
mod runner;

pub use commands::{log_filter, Cli};
pub use runner::{RunSummary, Runner};
