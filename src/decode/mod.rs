//! Response decoder module
//!
//! Extracts the record array from a listing response body. Listing bodies
//! look like `{ "data": [ {...}, {...} ] }`, with pagination links and other
//! metadata next to `data` that the fetcher does not read.

mod json;

pub use json::{JsonDecoder, RECORD_FIELD};
