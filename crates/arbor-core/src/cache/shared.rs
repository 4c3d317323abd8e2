//! Thread-safe memoizing cache.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;

/// Memoizing cache usable from multiple threads.
///
/// The map lock is held for the duration of the builder, so when two
/// callers race on the same absent key only one builder runs; a naive
/// check-then-act sequence would not give that guarantee. Builds are
/// serialized across keys in exchange — acceptable here, where the
/// contract is build-exactly-once, not build-concurrently.
#[derive(Debug)]
pub struct SharedMemoCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
}

impl<K: Eq + Hash, V: Clone> SharedMemoCache<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the value under `key`, building and storing it on a miss.
    ///
    /// The value is returned by clone so the lock is released before the
    /// caller touches it.
    pub fn get_or_build(&self, key: K, builder: impl FnOnce() -> V) -> V {
        let mut entries = self.entries.lock();
        entries.entry(key).or_insert_with(builder).clone()
    }

    /// Return a clone of the value under `key` if present.
    pub fn get(&self, key: &K) -> Option<V> {
        self.entries.lock().get(key).cloned()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl<K: Eq + Hash, V: Clone> Default for SharedMemoCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
