//! # Arbor Core
//!
//! Core algorithms for generic, type-parameterized sequence production.
//!
//! This crate provides:
//! - **Lazy numeric sequences** (Fibonacci-style recurrence)
//! - **Tree traversal** over any payload type (pre-order and level-order)
//! - **Lazy k-combinations** of a finite source collection
//! - **Bounded retry** for fallible computations, with diagnostic logging
//! - **Predicate conjunction** with short-circuit evaluation
//! - **Memoizing caches** with a build-exactly-once guarantee
//!
//! Every producer is pull-based: the consumer drives iteration one element
//! at a time, no work happens between pulls, and abandoning an iteration
//! mid-sequence is always safe.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cache;
pub mod combinatorics;
pub mod error;
pub mod predicate;
pub mod retry;
pub mod sequence;
pub mod slice;
pub mod tree;

pub use error::{ArborError, Result};

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::cache::{MemoCache, SharedMemoCache};
    pub use crate::combinatorics::{combinations, Combinations};
    pub use crate::error::{ArborError, Result};
    pub use crate::predicate::{all_of, Predicate};
    pub use crate::retry::{DiagnosticSink, RetryPolicy, TraceSink};
    pub use crate::sequence::{fibonacci, tokens, Fibonacci, Tokens};
    pub use crate::slice::swap_elements;
    pub use crate::tree::{breadth_first, depth_first, Node, TreeNode};
}
