//! Count-bounded retry for fallible computations.
//!
//! [`RetryPolicy`] invokes a zero-argument computation until it succeeds or
//! a fixed attempt budget is spent. Failures on non-final attempts are
//! recorded to a [`DiagnosticSink`] and retried immediately; there is no
//! backoff, timeout, or cancellation. The attempt count is the only bound
//! on repeated work.
//!
//! # Example
//!
//! ```rust
//! use arbor_core::retry::{RetryPolicy, TraceSink};
//!
//! let mut attempts = 0;
//! let value: Result<u32, String> = RetryPolicy::default().run(
//!     || {
//!         attempts += 1;
//!         if attempts < 3 { Err("unstable".to_string()) } else { Ok(7) }
//!     },
//!     &mut TraceSink,
//! );
//! assert_eq!(value.unwrap(), 7);
//! ```

use std::fmt::Display;

use crate::error::{ArborError, Result};

/// Sink for descriptions of failures discarded between retry attempts.
///
/// Recording is best-effort: it has no return value and must not fail.
pub trait DiagnosticSink {
    /// Record one failure description.
    fn record(&mut self, description: &str);
}

/// Diagnostic sink that forwards to `tracing::warn!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceSink;

impl DiagnosticSink for TraceSink {
    fn record(&mut self, description: &str) {
        tracing::warn!(target: "arbor::retry", "{description}");
    }
}

/// Count-bounded immediate-retry policy.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: usize,
}

impl Default for RetryPolicy {
    /// Three attempts, matching the classic try-thrice network idiom.
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

impl RetryPolicy {
    /// Create a policy with an explicit attempt budget.
    ///
    /// # Errors
    ///
    /// Returns [`ArborError::InvalidArgument`] when `max_attempts` is zero.
    pub fn new(max_attempts: usize) -> Result<Self> {
        if max_attempts == 0 {
            return Err(ArborError::InvalidArgument(
                "max_attempts must be at least 1".into(),
            ));
        }
        Ok(Self { max_attempts })
    }

    /// The attempt budget.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Invoke `op` until it succeeds or the attempt budget is spent.
    ///
    /// Every failure is considered retryable. Success on any attempt
    /// returns immediately; the final attempt's failure propagates to the
    /// caller unchanged.
    pub fn run<T, E, F, S>(&self, op: F, sink: &mut S) -> std::result::Result<T, E>
    where
        F: FnMut() -> std::result::Result<T, E>,
        E: Display,
        S: DiagnosticSink,
    {
        self.run_classified(op, |_| true, sink)
    }

    /// Invoke `op` with a failure-classification hook.
    ///
    /// A failure for which `retryable` returns `false` propagates
    /// immediately, even with budget remaining; retryable failures on
    /// non-final attempts are recorded to `sink` and retried with no
    /// delay.
    pub fn run_classified<T, E, F, C, S>(
        &self,
        mut op: F,
        retryable: C,
        sink: &mut S,
    ) -> std::result::Result<T, E>
    where
        F: FnMut() -> std::result::Result<T, E>,
        C: Fn(&E) -> bool,
        E: Display,
        S: DiagnosticSink,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match op() {
                Ok(value) => return Ok(value),
                Err(err) => {
                    if attempt >= self.max_attempts || !retryable(&err) {
                        return Err(err);
                    }
                    sink.record(&format!("attempt {attempt} failed: {err}"));
                }
            }
        }
    }
}
