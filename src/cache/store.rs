//! Cache Store Module
//!
//! Main cache engine combining the entry table with recency tracking,
//! byte-budget eviction, and TTL expiry.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheKey, CacheStats, RecencyList};

// == Cache Store ==
/// Namespaced cache storage with byte-budget LRU eviction and TTL support.
///
/// The entry table and recency list are kept in lockstep: every live
/// entry has exactly one recency node and vice versa. All removal paths
/// (delete, namespace clear, eviction, expiry) go through the same
/// bookkeeping so `used_bytes` always equals the sum of live entry sizes.
#[derive(Debug)]
pub struct CacheStore {
    /// Composite-key to entry storage
    entries: HashMap<CacheKey, CacheEntry>,
    /// LRU ordering over live entries
    recency: RecencyList,
    /// Performance counters
    stats: CacheStats,
    /// Sum of live entry sizes in bytes
    used_bytes: usize,
    /// Byte budget, fixed at construction
    max_bytes: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore with the given byte budget.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            recency: RecencyList::new(),
            stats: CacheStats::new(max_bytes),
            used_bytes: 0,
            max_bytes,
        }
    }

    // == Set ==
    /// Stores a value under (namespace, key) with optional TTL in
    /// milliseconds. A TTL of `None` or `Some(0)` means never expires.
    ///
    /// If the key already exists, the value and TTL are replaced in place
    /// and the entry becomes most recently used. After every set the byte
    /// budget is enforced by evicting least-recently-used entries.
    ///
    /// Writes never fail: a single value larger than the whole budget
    /// evicts everything else and remains the sole resident. This is a
    /// documented tradeoff, not an error.
    pub fn set(&mut self, key: CacheKey, value: Vec<u8>, ttl_ms: Option<u64>) {
        if let Some(entry) = self.entries.get_mut(&key) {
            let old_size = entry.replace(value, ttl_ms);
            self.used_bytes = self.used_bytes - old_size + entry.size;
            self.recency.move_to_front(entry.node);
        } else {
            let node = self.recency.push_front(key.clone());
            let entry = CacheEntry::new(value, ttl_ms, node);
            self.used_bytes += entry.size;
            self.entries.insert(key, entry);
        }

        self.enforce_budget();
        debug_assert_eq!(self.recency.len(), self.entries.len());
    }

    // == Get ==
    /// Retrieves a value by key, or None if absent or expired.
    ///
    /// Expired entries discovered here are removed (lazy expiry) and
    /// counted as misses. A hit marks the entry most recently used; this
    /// is the only read that mutates recency order.
    pub fn get(&mut self, key: &CacheKey) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.remove_entry(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                None
            }
            Some(entry) => {
                let node = entry.node;
                let value = entry.value.clone();
                self.recency.move_to_front(node);
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Has ==
    /// Checks whether a live (non-expired) entry exists for the key.
    ///
    /// Performs the same lazy expiry as `get` but never promotes recency
    /// and touches no hit/miss counters: existence checks do not count as
    /// usage. This asymmetry with `get` is intentional.
    pub fn has(&mut self, key: &CacheKey) -> bool {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.remove_entry(key);
                self.stats.record_expiration();
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether anything was removed;
    /// deleting an absent key has no side effects.
    pub fn delete(&mut self, key: &CacheKey) -> bool {
        self.remove_entry(key).is_some()
    }

    // == Clear Namespace ==
    /// Removes every entry in the given namespace and returns the count.
    /// Entries in other namespaces are untouched, even with identical
    /// raw key strings.
    pub fn clear_namespace(&mut self, namespace: &str) -> usize {
        let keys: Vec<CacheKey> = self
            .entries
            .keys()
            .filter(|k| k.namespace == namespace)
            .cloned()
            .collect();

        let count = keys.len();
        for key in keys {
            self.remove_entry(&key);
        }
        count
    }

    // == Sweep Expired ==
    /// Removes all expired entries, independent of access patterns.
    ///
    /// Called periodically by the background sweeper so expired keys
    /// nobody reads again still get reclaimed. O(live entries) per pass;
    /// runs off the hot path at a bounded rate.
    pub fn sweep_expired(&mut self) -> usize {
        let expired: Vec<CacheKey> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired.len();
        for key in expired {
            self.remove_entry(&key);
            self.stats.record_expiration();
        }
        count
    }

    // == Stats ==
    /// Returns current cache statistics. Pure read, no mutation.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.entries = self.entries.len();
        stats.used_bytes = self.used_bytes;
        stats.max_bytes = self.max_bytes;
        stats
    }

    // == Length ==
    /// Returns the current number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of live entry sizes in bytes.
    pub fn used_bytes(&self) -> usize {
        self.used_bytes
    }

    /// Configured byte budget.
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    // == Internal ==

    /// Evicts least-recently-used entries until under budget.
    ///
    /// The entry just written sits at the list head, so with more than
    /// one resident the tail victim is never the new entry. Once it is
    /// the only one left it stays, even above budget: a value larger
    /// than the whole budget becomes the sole resident.
    fn enforce_budget(&mut self) {
        while self.used_bytes > self.max_bytes && self.entries.len() > 1 {
            // Empty list with bytes still accounted would mean the table
            // and list desynchronized; stop rather than spin.
            let Some(victim) = self.recency.pop_back() else {
                debug_assert!(self.entries.is_empty());
                break;
            };
            if let Some(entry) = self.entries.remove(&victim) {
                self.used_bytes -= entry.size;
                self.stats.record_eviction();
            }
        }
    }

    /// Single removal path shared by delete, clear, expiry and sweep:
    /// table remove + recency detach + byte accounting, transactionally.
    fn remove_entry(&mut self, key: &CacheKey) -> Option<CacheEntry> {
        let entry = self.entries.remove(key)?;
        let detached = self.recency.detach(entry.node);
        debug_assert_eq!(&detached, key);
        self.used_bytes -= entry.size;
        Some(entry)
    }

    /// Verifies the central invariants. Test-only.
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        let size_sum: usize = self.entries.values().map(|e| e.size).sum();
        assert_eq!(self.used_bytes, size_sum, "used_bytes drifted from true sum");

        assert_eq!(self.recency.len(), self.entries.len());
        for key in self.recency.keys() {
            assert!(
                self.entries.contains_key(key),
                "recency node {key} has no table entry"
            );
        }
    }

    /// Eviction order, least recent first. Test-only.
    #[cfg(test)]
    pub(crate) fn eviction_order(&self) -> Vec<CacheKey> {
        let mut order: Vec<CacheKey> = self.recency.keys().cloned().collect();
        order.reverse();
        order
    }
}
