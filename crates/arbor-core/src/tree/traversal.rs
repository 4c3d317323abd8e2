//! Lazy pre-order and level-order traversal.

use std::collections::VecDeque;

use super::TreeNode;
use crate::error::{ArborError, Result};

/// Create a lazy pre-order (depth-first) traversal of the tree at `root`.
///
/// Each node's payload is yielded before any of its descendants, and each
/// subtree is exhausted before the next sibling. The frontier is an
/// explicit stack, so traversal depth is bounded by memory rather than the
/// call stack. Visiting order is deterministic for a given tree.
///
/// # Errors
///
/// Returns [`ArborError::NullInput`] when `root` is `None`.
pub fn depth_first<N: TreeNode>(root: Option<&N>) -> Result<DepthFirst<'_, N>> {
    let root =
        root.ok_or_else(|| ArborError::NullInput("depth-first traversal requires a root".into()))?;
    Ok(DepthFirst { stack: vec![root] })
}

/// Create a lazy level-order (breadth-first) traversal of the tree at `root`.
///
/// Yields the root, then every node at depth 1 in sibling order, then depth
/// 2, and so on, using a FIFO frontier.
///
/// # Errors
///
/// Returns [`ArborError::NullInput`] when `root` is `None`.
pub fn breadth_first<N: TreeNode>(root: Option<&N>) -> Result<BreadthFirst<'_, N>> {
    let root = root
        .ok_or_else(|| ArborError::NullInput("breadth-first traversal requires a root".into()))?;
    let mut queue = VecDeque::new();
    queue.push_back(root);
    Ok(BreadthFirst { queue })
}

/// Pre-order traversal iterator.
///
/// Suspended state is the frontier stack; dropping the iterator
/// mid-traversal releases it with no further effects.
#[derive(Debug)]
pub struct DepthFirst<'a, N> {
    stack: Vec<&'a N>,
}

impl<'a, N: TreeNode> Iterator for DepthFirst<'a, N> {
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<&'a N::Value> {
        let node = self.stack.pop()?;
        // Reversed so the leftmost child is popped first.
        self.stack.extend(node.children().iter().rev());
        Some(node.value())
    }
}

/// Level-order traversal iterator.
#[derive(Debug)]
pub struct BreadthFirst<'a, N> {
    queue: VecDeque<&'a N>,
}

impl<'a, N: TreeNode> Iterator for BreadthFirst<'a, N> {
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<&'a N::Value> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.children().iter());
        Some(node.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;

    /// Tree used by the pre-order golden case:
    ///
    /// ```text
    ///          1
    ///        / | \
    ///       2  6  7
    ///      / \     \
    ///     3   4     8
    ///         |
    ///         5
    /// ```
    fn preorder_sample() -> Node<i32> {
        Node::with_children(
            1,
            vec![
                Node::with_children(
                    2,
                    vec![
                        Node::leaf(3),
                        Node::with_children(4, vec![Node::leaf(5)]),
                    ],
                ),
                Node::leaf(6),
                Node::with_children(7, vec![Node::leaf(8)]),
            ],
        )
    }

    /// Tree used by the level-order golden case:
    ///
    /// ```text
    ///          1
    ///        / | \
    ///       2  3  4
    ///      / \     \
    ///     5   6     7
    ///         |
    ///         8
    /// ```
    fn levelorder_sample() -> Node<i32> {
        Node::with_children(
            1,
            vec![
                Node::with_children(
                    2,
                    vec![
                        Node::leaf(5),
                        Node::with_children(6, vec![Node::leaf(8)]),
                    ],
                ),
                Node::leaf(3),
                Node::with_children(4, vec![Node::leaf(7)]),
            ],
        )
    }

    #[test]
    fn depth_first_golden_order() {
        let tree = preorder_sample();
        let order: Vec<i32> = depth_first(Some(&tree)).unwrap().copied().collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn breadth_first_golden_order() {
        let tree = levelorder_sample();
        let order: Vec<i32> = breadth_first(Some(&tree)).unwrap().copied().collect();
        assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn absent_root_is_null_input() {
        let missing: Option<&Node<i32>> = None;
        assert!(matches!(
            depth_first(missing),
            Err(ArborError::NullInput(_))
        ));
        assert!(matches!(
            breadth_first(missing),
            Err(ArborError::NullInput(_))
        ));
    }

    #[test]
    fn single_node_tree() {
        let tree = Node::leaf(42);
        let dfs: Vec<i32> = depth_first(Some(&tree)).unwrap().copied().collect();
        let bfs: Vec<i32> = breadth_first(Some(&tree)).unwrap().copied().collect();
        assert_eq!(dfs, vec![42]);
        assert_eq!(bfs, vec![42]);
    }

    #[test]
    fn every_node_visited_exactly_once() {
        let tree = preorder_sample();

        let mut dfs: Vec<i32> = depth_first(Some(&tree)).unwrap().copied().collect();
        let mut bfs: Vec<i32> = breadth_first(Some(&tree)).unwrap().copied().collect();
        dfs.sort_unstable();
        bfs.sort_unstable();

        let expected: Vec<i32> = (1..=8).collect();
        assert_eq!(dfs, expected);
        assert_eq!(bfs, expected);
    }

    #[test]
    fn parent_precedes_descendants_in_preorder() {
        let tree = preorder_sample();
        let order: Vec<i32> = depth_first(Some(&tree)).unwrap().copied().collect();

        let position = |v: i32| order.iter().position(|&x| x == v).unwrap();
        // 4 is an ancestor of 5; 2's subtree precedes siblings 6 and 7.
        assert!(position(4) < position(5));
        assert!(position(5) < position(6));
        assert!(position(6) < position(7));
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        // 5_000-deep single chain; the explicit stack frontier keeps the
        // walk iterative.
        let mut tree = Node::leaf(4_999u32);
        for value in (0..4_999).rev() {
            tree = Node::with_children(value, vec![tree]);
        }

        let visited = depth_first(Some(&tree)).unwrap().count();
        assert_eq!(visited, 5_000);
    }

    #[test]
    fn abandoning_mid_traversal_is_safe() {
        let tree = preorder_sample();
        let first_three: Vec<i32> = depth_first(Some(&tree)).unwrap().take(3).copied().collect();
        assert_eq!(first_three, vec![1, 2, 3]);
    }

    #[test]
    fn traversal_works_for_non_copy_payloads() {
        let tree = Node::with_children(
            "root".to_string(),
            vec![Node::leaf("left".to_string()), Node::leaf("right".to_string())],
        );

        let order: Vec<&String> = breadth_first(Some(&tree)).unwrap().collect();
        assert_eq!(order, ["root", "left", "right"]);
    }
}
