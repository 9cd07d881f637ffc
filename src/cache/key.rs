//! Cache Key Module
//!
//! Defines the composite (namespace, key) identity of a cache entry.

use std::fmt;

use serde::Serialize;

// == Cache Key ==
/// Composite identity of a cache entry: a namespace plus a key.
///
/// The pair is structural — there is no separator string joining the two
/// components, so `("a", "b:c")` and `("a:b", "c")` are always distinct
/// identities. The `ns:key` rendering produced by `Display` is for log
/// lines only and never used for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CacheKey {
    /// Logical partition of the key space
    pub namespace: String,
    /// Key within the namespace
    pub key: String,
}

impl CacheKey {
    /// Creates a new composite key.
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}
