//! Authentication module
//!
//! The listing API uses HTTP Basic authentication: the API username
//! (identifier) and the API token form the credential pair.

mod types;

pub use types::Credentials;

#[cfg(test)]
mod tests;
