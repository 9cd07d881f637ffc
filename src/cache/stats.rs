//! Cache Statistics Module
//!
//! Tracks cache occupancy and performance counters.

use serde::Serialize;

// == Cache Stats ==
/// Aggregate cache state plus performance counters.
///
/// `used_bytes`/`max_bytes`/`entries` describe current occupancy; the
/// counters accumulate over the engine's lifetime. Existence checks via
/// `has` touch neither hits nor misses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Current number of live entries
    pub entries: usize,
    /// Sum of live entry sizes in bytes
    pub used_bytes: usize,
    /// Configured byte budget
    pub max_bytes: usize,
    /// Number of successful retrievals
    pub hits: u64,
    /// Number of failed retrievals (absent or expired)
    pub misses: u64,
    /// Number of entries evicted by budget enforcement
    pub evictions: u64,
    /// Number of entries removed because their TTL elapsed
    pub expirations: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Expiration ==
    /// Increments the expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }
}
