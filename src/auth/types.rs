//! Credential types

use reqwest::RequestBuilder;
use std::fmt;

/// HTTP Basic credential pair (API identifier + API token)
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API username (identifier)
    username: String,
    /// API key (token)
    api_key: String,
}

impl Credentials {
    /// Create a new credential pair
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Get the username
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Apply basic authentication to a request builder
    pub fn apply(&self, req: RequestBuilder) -> RequestBuilder {
        req.basic_auth(&self.username, Some(&self.api_key))
    }
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
