//! Lazy sequence producers.
//!
//! Sequences in this module are pull-based: each call to `next` computes
//! exactly one element from a small amount of suspended state, so a
//! consumer can abandon iteration at any point without waste.
//!
//! # Example
//!
//! ```rust
//! use arbor_core::sequence::fibonacci;
//!
//! let seq: Vec<u64> = fibonacci(5).unwrap().collect();
//! assert_eq!(seq, vec![1, 1, 2, 3, 5]);
//! ```

mod fibonacci;
mod tokens;

pub use fibonacci::{fibonacci, Fibonacci};
pub use tokens::{tokens, Tokens};
