//! # Arbor
//!
//! Generic lazy sequences, tree traversal, and combinatorics.
//!
//! Arbor provides composable, pull-based producers over user-defined
//! element types:
//! - **Lazy sequences**: Fibonacci recurrence, stream tokenization
//! - **Tree traversal**: pre-order and level-order over any payload type
//! - **Combinatorics**: all k-element selections of a source, lazily
//! - **Resilience**: count-bounded retry and memoizing caches
//!
//! ## Quick Start
//!
//! ```rust
//! use arbor::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let tree = Node::with_children(1, vec![Node::leaf(2), Node::leaf(3)]);
//!
//!     let order: Vec<i32> = depth_first(Some(&tree))?.copied().collect();
//!     assert_eq!(order, vec![1, 2, 3]);
//!
//!     let pairs: Vec<Vec<i32>> = combinations(&order, 2)?.collect();
//!     assert_eq!(pairs.len(), 3);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Re-export core crate
pub use arbor_core::*;

/// Commonly used types.
pub mod prelude {
    pub use arbor_core::{
        cache::{MemoCache, SharedMemoCache},
        combinatorics::{combinations, Combinations},
        error::{ArborError, Result},
        predicate::{all_of, Predicate},
        retry::{DiagnosticSink, RetryPolicy, TraceSink},
        sequence::{fibonacci, tokens, Fibonacci, Tokens},
        slice::swap_elements,
        tree::{breadth_first, depth_first, Node, TreeNode},
    };

    // Re-export useful external types
    pub use anyhow;
    pub use tracing;
}
