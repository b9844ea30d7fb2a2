//! JSON listing decoder

use crate::error::{Error, Result};
use crate::types::Program;
use serde_json::Value;

/// Field holding the records of a listing page
pub const RECORD_FIELD: &str = "data";

/// Decoder for listing bodies shaped like `{ "data": [ ... ] }`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a decoder reading the `data` array
    pub fn new() -> Self {
        Self
    }

    /// Extract programs from a parsed listing body
    ///
    /// A missing or null record field is an empty page. Any other
    /// non-array value is a decode error.
    pub fn extract_records(&self, value: Value) -> Result<Vec<Program>> {
        let mut body = match value {
            Value::Object(body) => body,
            other => {
                return Err(Error::decode(format!(
                    "Expected a JSON object at the top level, got {}",
                    kind_of(&other)
                )))
            }
        };

        match body.remove(RECORD_FIELD) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(records)) => Ok(records.into_iter().map(Program::new).collect()),
            Some(other) => Err(Error::decode(format!(
                "Expected an array at '{RECORD_FIELD}', got {}",
                kind_of(&other)
            ))),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
