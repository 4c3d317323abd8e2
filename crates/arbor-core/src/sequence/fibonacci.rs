//! Lazy Fibonacci sequence.

use crate::error::{ArborError, Result};

/// Create a lazy Fibonacci sequence of exactly `count` values.
///
/// The recurrence is seeded with `previous = 0`, `current = 1`; each pull
/// emits `current` and then advances the pair. Values are fixed-width and
/// wrap on overflow, so arbitrarily long pulls stay total.
///
/// # Errors
///
/// Returns [`ArborError::InvalidArgument`] if `count` is negative.
/// `count = 0` is valid and produces an empty sequence.
///
/// # Example
///
/// ```rust
/// use arbor_core::sequence::fibonacci;
///
/// assert_eq!(fibonacci(0).unwrap().count(), 0);
/// let first: Vec<u64> = fibonacci(4).unwrap().collect();
/// assert_eq!(first, vec![1, 1, 2, 3]);
/// ```
pub fn fibonacci(count: i64) -> Result<Fibonacci> {
    if count < 0 {
        return Err(ArborError::InvalidArgument(format!(
            "fibonacci count must be non-negative, got {count}"
        )));
    }

    Ok(Fibonacci {
        previous: 0,
        current: 1,
        remaining: count as u64,
    })
}

/// Iterator over a bounded Fibonacci sequence.
///
/// Carries only the recurrence pair and a step counter between pulls;
/// no element is computed before it is requested. Single-pass: restart
/// by calling [`fibonacci`] again.
#[derive(Debug, Clone)]
pub struct Fibonacci {
    previous: u64,
    current: u64,
    remaining: u64,
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let emitted = self.current;
        let advanced = self.previous.wrapping_add(self.current);
        self.previous = self.current;
        self.current = advanced;
        Some(emitted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
