// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # HackerOne Program Fetcher
//!
//! Fetches every program listed by the HackerOne hacker API, optionally keeps
//! only bounty programs or vulnerability disclosure programs (VDPs), and saves
//! the result as pretty-printed JSON.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hackerone_fetcher::auth::Credentials;
//! use hackerone_fetcher::cli::Runner;
//! use hackerone_fetcher::config::FetcherConfig;
//! use hackerone_fetcher::filter::ProgramType;
//!
//! #[tokio::main]
//! async fn main() -> hackerone_fetcher::Result<()> {
//!     let config = FetcherConfig::new(Credentials::new("username", "api-token"))
//!         .with_program_type(Some(ProgramType::Bounty))
//!         .with_output("bounty.json");
//!
//!     let summary = Runner::new(config).run().await?;
//!     println!("kept {} of {} programs", summary.kept, summary.fetched);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌──────────────────────────────┐   ┌──────────┐   ┌──────────┐
//! │ CLI/Config │──▶│ Engine (page loop)           │──▶│  Filter  │──▶│  Output  │
//! └────────────┘   │  Auth · HTTP · Paginate ·    │   │ all      │   │ JSON     │
//!                  │  Decode                      │   │ bounty   │   │ indent 4 │
//!                  └──────────────────────────────┘   │ vdp      │   └──────────┘
//!                                                     └──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Basic auth credentials
pub mod auth;

/// HTTP client
pub mod http;

/// Page number pagination
pub mod pagination;

/// Listing body decoder
pub mod decode;

/// Page loop and failure policy
pub mod engine;

/// Program category filter
pub mod filter;

/// JSON file output
pub mod output;

/// Run configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
