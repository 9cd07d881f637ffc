//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

/// Decodes stored bytes for presentation.
///
/// Mirror of the write-side normalization: if the bytes round-trip
/// through JSON they are presented as structured data, otherwise as a
/// UTF-8 string (lossy for bytes that were never valid UTF-8, which can
/// only have been stored through the library API).
pub fn present_value(bytes: &[u8]) -> Value {
    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(_) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
    }
}

/// Response body for the GET operation (GET /cache/:ns/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The namespace looked up
    pub namespace: String,
    /// The requested key
    pub key: String,
    /// The stored value, structured where it round-trips through JSON
    pub value: Value,
}

impl GetResponse {
    /// Creates a GetResponse by decoding the stored bytes.
    pub fn from_bytes(namespace: impl Into<String>, key: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
            value: present_value(bytes),
        }
    }
}

/// Response body for the SET operation (PUT /cache/:ns/:key)
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Success message
    pub message: String,
    /// The namespace written to
    pub namespace: String,
    /// The key that was set
    pub key: String,
    /// Stored size in bytes
    pub size: usize,
}

impl SetResponse {
    /// Creates a new SetResponse
    pub fn new(namespace: impl Into<String>, key: impl Into<String>, size: usize) -> Self {
        let namespace = namespace.into();
        let key = key.into();
        Self {
            message: format!("Key '{}' set in namespace '{}'", key, namespace),
            namespace,
            key,
            size,
        }
    }
}

/// Response body for the existence check (GET /cache/:ns/:key/exists)
#[derive(Debug, Clone, Serialize)]
pub struct ExistsResponse {
    /// The namespace looked up
    pub namespace: String,
    /// The key checked
    pub key: String,
    /// Whether a live entry exists
    pub exists: bool,
}

impl ExistsResponse {
    /// Creates a new ExistsResponse
    pub fn new(namespace: impl Into<String>, key: impl Into<String>, exists: bool) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
            exists,
        }
    }
}

/// Response body for the DELETE operation (DELETE /cache/:ns/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// The namespace deleted from
    pub namespace: String,
    /// The key that was targeted
    pub key: String,
    /// Whether an entry was actually removed
    pub deleted: bool,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(namespace: impl Into<String>, key: impl Into<String>, deleted: bool) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
            deleted,
        }
    }
}

/// Response body for the namespace clear (DELETE /cache/:ns)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// The namespace cleared
    pub namespace: String,
    /// Number of entries removed
    pub removed: usize,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new(namespace: impl Into<String>, removed: usize) -> Self {
        Self {
            namespace: namespace.into(),
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Current number of entries in cache
    pub entries: usize,
    /// Bytes currently used by stored values
    pub used_bytes: usize,
    /// Configured byte budget
    pub max_bytes: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of budget-driven evictions
    pub evictions: u64,
    /// Number of TTL expirations
    pub expirations: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn from_stats(stats: &crate::cache::CacheStats) -> Self {
        Self {
            entries: stats.entries,
            used_bytes: stats.used_bytes,
            max_bytes: stats.max_bytes,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
