//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// The entry is owned exclusively by the entry table. Its `node` field is
/// a non-owning index into the [`RecencyList`](crate::cache::RecencyList)
/// arena; the node is created and destroyed in lockstep with the entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value; replaced whole on overwrite, never mutated in part
    pub value: Vec<u8>,
    /// Expiration timestamp (Unix milliseconds), None = never expires
    pub expires_at: Option<u64>,
    /// Byte length of `value`, cached for budget accounting
    pub size: usize,
    /// Index of this entry's node in the recency list
    pub node: usize,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    ///
    /// A `ttl_ms` of `None` or `Some(0)` means the entry never expires.
    ///
    /// # Arguments
    /// * `value` - The value bytes to store
    /// * `ttl_ms` - Optional TTL in milliseconds
    /// * `node` - Recency list node index for this entry
    pub fn new(value: Vec<u8>, ttl_ms: Option<u64>, node: usize) -> Self {
        let size = value.len();
        let expires_at = match ttl_ms {
            Some(ttl) if ttl > 0 => Some(current_timestamp_ms() + ttl),
            _ => None,
        };

        Self {
            value,
            expires_at,
            size,
            node,
        }
    }

    // == Replace ==
    /// Replaces the value and TTL in place, keeping the entry's identity
    /// (and recency node) intact. Returns the old size for budget accounting.
    pub fn replace(&mut self, value: Vec<u8>, ttl_ms: Option<u64>) -> usize {
        let old_size = self.size;
        self.size = value.len();
        self.value = value;
        self.expires_at = match ttl_ms {
            Some(ttl) if ttl > 0 => Some(current_timestamp_ms() + ttl),
            _ => None,
        };
        old_size
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so a key set with
    /// `ttl = T` is gone at any time `>= T` after the set.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
