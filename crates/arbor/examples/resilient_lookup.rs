//! Resilient lookup example.
//!
//! Wraps a flaky lookup in the bounded retry policy (intervening failures
//! are logged through tracing) and memoizes the result so repeated
//! lookups never re-run the computation.

use std::cell::Cell;

use anyhow::Result;
use arbor::prelude::*;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // A lookup that fails twice before recovering.
    let attempts = Cell::new(0u32);
    let flaky_lookup = || {
        attempts.set(attempts.get() + 1);
        if attempts.get() < 3 {
            Err(format!("connection reset (attempt {})", attempts.get()))
        } else {
            Ok("user #10: Ada".to_string())
        }
    };

    let value = RetryPolicy::default()
        .run(flaky_lookup, &mut TraceSink)
        .map_err(anyhow::Error::msg)?;
    println!("retried lookup succeeded: {value}");

    // Memoize further lookups; the builder runs at most once per key.
    let cache: SharedMemoCache<u32, String> = SharedMemoCache::new();
    let first = cache.get_or_build(10, || value.clone());
    let second = cache.get_or_build(10, || unreachable!("already cached"));
    assert_eq!(first, second);
    println!("cached lookup: {second}");

    Ok(())
}
