//! Common types used throughout the fetcher
//!
//! This module contains shared type definitions and the `Program` record
//! returned by the listing endpoint.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Program
// ============================================================================

/// A single program listing as delivered by the API
///
/// The record is kept verbatim and serializes back to exactly the JSON it
/// was built from. Only `attributes.offers_bounties` is ever interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program(JsonValue);

impl Program {
    /// Wrap a raw JSON record
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// The `attributes` sub-object, if the record has one
    pub fn attributes(&self) -> Option<&JsonObject> {
        self.0.get("attributes").and_then(JsonValue::as_object)
    }

    /// Whether the program pays bounties
    ///
    /// `None` when the attribute is absent, null, or not a boolean.
    pub fn offers_bounties(&self) -> Option<bool> {
        self.attributes()?
            .get("offers_bounties")
            .and_then(JsonValue::as_bool)
    }

    /// The API-assigned identifier, if present
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(JsonValue::as_str)
    }
}
