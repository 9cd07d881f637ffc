//! Cache Module
//!
//! Provides namespaced in-memory caching with TTL expiry and
//! byte-budget LRU eviction.

mod entry;
mod key;
mod recency;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use recency::RecencyList;
pub use stats::CacheStats;
pub use store::CacheStore;
