//! Memoizing caches with a build-exactly-once guarantee.
//!
//! Two variants cover the two usage contexts:
//!
//! - [`MemoCache`] — single-threaded get-or-build over an owned map
//! - [`SharedMemoCache`] — the same contract behind a lock, for use from
//!   multiple threads; the lock is held for the duration of the builder so
//!   two callers racing on the same absent key cannot both build
//!
//! Neither cache evicts or expires entries: a built value lives as long as
//! the cache object. Both are explicit, caller-owned objects rather than
//! process-wide state.
//!
//! # Example
//!
//! ```rust
//! use arbor_core::cache::MemoCache;
//!
//! let mut cache = MemoCache::new();
//! let value = *cache.get_or_build(10, || 10 * 10);
//! assert_eq!(value, 100);
//!
//! // The second lookup never invokes the builder.
//! let cached = *cache.get_or_build(10, || unreachable!());
//! assert_eq!(cached, 100);
//! ```

mod memo;
mod shared;

pub use memo::MemoCache;
pub use shared::SharedMemoCache;
