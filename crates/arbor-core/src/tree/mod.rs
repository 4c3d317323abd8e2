//! Tree traversal over polymorphic, non-binary trees.
//!
//! This module provides:
//! - The [`TreeNode`] capability: a payload plus an ordered, possibly-empty
//!   list of children
//! - An owned [`Node`] type implementing that capability
//! - Lazy pre-order ([`depth_first`]) and level-order ([`breadth_first`])
//!   traversal iterators
//!
//! Both traversals keep an explicit frontier (a stack or a queue of node
//! references) instead of recursing, so trees of any depth can be walked
//! without risking call-stack exhaustion. The tree is only read, never
//! mutated.
//!
//! # Precondition
//!
//! The structure must be a finite rooted tree: no node may be reachable
//! from itself via children. Traversal performs no cycle detection and
//! will not terminate on cyclic input.
//!
//! # Example
//!
//! ```rust
//! use arbor_core::tree::{depth_first, Node};
//!
//! let tree = Node::with_children(1, vec![
//!     Node::with_children(2, vec![Node::leaf(3), Node::leaf(4)]),
//!     Node::leaf(5),
//! ]);
//!
//! let order: Vec<i32> = depth_first(Some(&tree)).unwrap().copied().collect();
//! assert_eq!(order, vec![1, 2, 3, 4, 5]);
//! ```

mod node;
mod traversal;

pub use node::{Node, TreeNode};
pub use traversal::{breadth_first, depth_first, BreadthFirst, DepthFirst};
