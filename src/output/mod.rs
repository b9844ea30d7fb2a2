//! Output module
//!
//! Persists a filtered result set as a pretty-printed JSON array.
//!
//! # Overview
//!
//! - [`JsonWriter`] writes programs to a file, replacing any previous content
//! - [`write_programs`] skips empty result sets instead of writing `[]`

mod writer;

pub use writer::{write_programs, JsonWriter, WriteOutcome};
