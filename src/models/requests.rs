//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::store::MAX_KEY_LENGTH;

/// Request body for the write operation (POST /cache)
///
/// Both fields are optional at the deserialization layer so that missing
/// fields surface as a validation failure on the wire contract rather than
/// a body-rejection from the JSON extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key to store the data under
    #[serde(default)]
    pub key: Option<String>,
    /// The opaque data to store (any JSON value)
    #[serde(default)]
    pub data: Option<Value>,
}

impl PutRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        let key = match &self.key {
            Some(key) => key.trim(),
            None => return Some("key is required".to_string()),
        };
        if key.is_empty() {
            return Some("key must not be empty".to_string());
        }
        if key.chars().count() > MAX_KEY_LENGTH {
            return Some(format!(
                "key exceeds maximum length of {} characters",
                MAX_KEY_LENGTH
            ));
        }
        if self.data.is_none() {
            return Some("data is required".to_string());
        }
        None
    }
}
