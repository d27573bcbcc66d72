//! Recursive traversals: the call stack holds the pending nodes.
//!
//! Recursion depth equals the tree height. An absent node is the base case
//! and contributes nothing.

use tracing::{instrument, trace};

use crate::domain::Node;

#[instrument(level = "trace", skip_all)]
pub fn preorder_recursive(root: Option<&Node>) -> Vec<i32> {
    fn walk(node: Option<&Node>, visited: &mut Vec<i32>) {
        if let Some(node) = node {
            visited.push(node.value());
            walk(node.left(), visited);
            walk(node.right(), visited);
        }
    }

    let mut visited = Vec::new();
    walk(root, &mut visited);
    trace!(count = visited.len(), "preorder recursive done");
    visited
}

#[instrument(level = "trace", skip_all)]
pub fn inorder_recursive(root: Option<&Node>) -> Vec<i32> {
    fn walk(node: Option<&Node>, visited: &mut Vec<i32>) {
        if let Some(node) = node {
            walk(node.left(), visited);
            visited.push(node.value());
            walk(node.right(), visited);
        }
    }

    let mut visited = Vec::new();
    walk(root, &mut visited);
    trace!(count = visited.len(), "inorder recursive done");
    visited
}

#[instrument(level = "trace", skip_all)]
pub fn postorder_recursive(root: Option<&Node>) -> Vec<i32> {
    fn walk(node: Option<&Node>, visited: &mut Vec<i32>) {
        if let Some(node) = node {
            walk(node.left(), visited);
            walk(node.right(), visited);
            visited.push(node.value());
        }
    }

    let mut visited = Vec::new();
    walk(root, &mut visited);
    trace!(count = visited.len(), "postorder recursive done");
    visited
}
