//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies and the value
//! normalization policy applied before storage.

use serde::Deserialize;
use serde_json::Value;

/// Request body for the SET operation (PUT /cache/:ns/:key)
///
/// # Fields
/// - `value`: Any JSON value to store
/// - `ttl_ms`: Optional TTL in milliseconds; absent or 0 = never expires
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The value to store
    pub value: Value,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl SetRequest {
    /// Validates the request data.
    ///
    /// Returns an error message if validation fails, None if valid.
    /// Rejecting a missing value here keeps the engine's error surface
    /// narrow: nothing invalid ever reaches it.
    pub fn validate(&self) -> Option<String> {
        if self.value.is_null() {
            return Some("Value cannot be null".to_string());
        }
        None
    }

    /// Normalizes the value to the byte sequence the engine stores.
    ///
    /// Policy: JSON strings are encoded as raw UTF-8; every other JSON
    /// value is serialized deterministically via `serde_json::to_vec`.
    /// Library callers may bypass this by handing the engine raw bytes.
    pub fn value_bytes(&self) -> Vec<u8> {
        match &self.value {
            Value::String(s) => s.clone().into_bytes(),
            other => serde_json::to_vec(other).expect("JSON value serialization cannot fail"),
        }
    }
}
