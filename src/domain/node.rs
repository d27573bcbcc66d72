//! Binary tree node with exclusively owned children

use std::fmt;

/// Binary tree node holding an integer payload.
///
/// Children are owned boxes, so a tree is always finite and acyclic.
/// Nodes are built bottom-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: i32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Create a node with the given children.
    pub fn new(value: i32, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Create a node without children.
    pub fn leaf(value: i32) -> Self {
        Self::new(value, None, None)
    }

    pub fn with_left(mut self, left: Node) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    pub fn with_right(mut self, right: Node) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of nodes in the subtree rooted here.
    pub fn node_count(&self) -> usize {
        1 + self.left().map_or(0, Node::node_count) + self.right().map_or(0, Node::node_count)
    }

    /// Number of levels in the subtree rooted here (a leaf has height 1).
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        1 + left.max(right)
    }

    /// Iterate over the present children, left first.
    pub(crate) fn children(&self) -> impl Iterator<Item = &Node> {
        self.left().into_iter().chain(self.right())
    }
}

/// Printable form of a visited node's payload, as used by `Display`.
pub fn data_label(value: i32) -> String {
    format!("Node [data={value}]")
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&data_label(self.value))
    }
}
