//! Single-threaded memoizing cache.

use std::collections::HashMap;
use std::hash::Hash;

/// Get-or-build map wrapper.
///
/// A present key returns the stored value without invoking the builder; an
/// absent key invokes the builder exactly once, stores the result, and
/// returns it. No eviction policy.
#[derive(Debug, Clone)]
pub struct MemoCache<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> MemoCache<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create an empty cache with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Return the value under `key`, building and storing it on a miss.
    pub fn get_or_build(&mut self, key: K, builder: impl FnOnce() -> V) -> &V {
        self.entries.entry(key).or_insert_with(builder)
    }

    /// Return the value under `key` if present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Whether `key` has a stored value.
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for MemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
