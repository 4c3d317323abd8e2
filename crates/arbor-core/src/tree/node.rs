//! Tree node capability and the default owned node type.

/// Capability required of a traversable tree node.
///
/// Any type exposing a payload and an ordered slice of children satisfies
/// this; no inheritance hierarchy or mutation access is needed. A parsed
/// document or deserialized record set can adapt to this shape and be
/// traversed directly.
pub trait TreeNode {
    /// Payload type carried by each node.
    type Value;

    /// The node's payload.
    fn value(&self) -> &Self::Value;

    /// The node's ordered children. An empty slice denotes a leaf.
    fn children(&self) -> &[Self]
    where
        Self: Sized;
}

/// Owned tree node: a payload plus ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    children: Vec<Node<T>>,
}

impl<T> Node<T> {
    /// Create a leaf node with no children.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Create a node with the given ordered children.
    pub fn with_children(value: T, children: Vec<Node<T>>) -> Self {
        Self { value, children }
    }

    /// Append a child after the existing children.
    pub fn push_child(&mut self, child: Node<T>) {
        self.children.push(child);
    }

    /// The node's payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The node's ordered children.
    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }
}

impl<T> TreeNode for Node<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.value
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}
