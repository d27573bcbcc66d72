//! Stack based traversals.
//!
//! Each function owns its explicit stack of borrowed nodes; nothing is shared
//! between calls. The tree is never mutated and nodes carry no parent link.

use std::ptr;

use tracing::{instrument, trace};

use crate::domain::{DomainError, DomainResult, Node};

/// Preorder with an explicit stack.
///
/// Pushes the right child before the left one so the left child is popped
/// first. Unlike the other traversals an absent root is a precondition
/// violation and is reported as [`DomainError::EmptyTree`].
#[instrument(level = "trace", skip_all)]
pub fn preorder_iterative(root: Option<&Node>) -> DomainResult<Vec<i32>> {
    let root = root.ok_or(DomainError::EmptyTree {
        traversal: "iterative preorder",
    })?;

    let mut visited = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        visited.push(node.value());
        if let Some(right) = node.right() {
            stack.push(right);
        }
        if let Some(left) = node.left() {
            stack.push(left);
        }
    }

    trace!(count = visited.len(), "preorder iterative done");
    Ok(visited)
}

/// Inorder with an explicit stack.
///
/// The stack holds the nodes still waiting for their visit, next one on top:
/// the left spine below the current position plus the ancestors whose left
/// subtree is in progress.
#[instrument(level = "trace", skip_all)]
pub fn inorder_iterative(root: Option<&Node>) -> Vec<i32> {
    let mut visited = Vec::new();
    let mut stack = Vec::new();
    push_left_spine(root, &mut stack);

    while let Some(node) = stack.pop() {
        visited.push(node.value());
        push_left_spine(node.right(), &mut stack);
    }

    trace!(count = visited.len(), "inorder iterative done");
    visited
}

fn push_left_spine<'a>(mut node: Option<&'a Node>, stack: &mut Vec<&'a Node>) {
    while let Some(current) = node {
        stack.push(current);
        node = current.left();
    }
}

/// Direction of the postorder walk relative to the node on top of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Top node is seen for the first time: its children are still pending.
    Descending,
    /// Last visited node is a child of the top node: its subtrees are done.
    Ascending,
}

impl Phase {
    /// Infer the phase from the traversal history.
    ///
    /// Compares by identity, so trees with duplicate values are handled.
    fn of(current: &Node, previously_visited: Option<&Node>) -> Self {
        match previously_visited {
            Some(prev) if current.children().any(|child| ptr::eq(child, prev)) => {
                Phase::Ascending
            }
            _ => Phase::Descending,
        }
    }
}

/// Postorder with an explicit stack and no parent pointers.
///
/// The top of the stack is peeked, not popped. A parent stays on the stack
/// below its children and is emitted once the last visited node is one of
/// its children. An absent root yields an empty sequence.
#[instrument(level = "trace", skip_all)]
pub fn postorder_iterative(root: Option<&Node>) -> Vec<i32> {
    let mut visited = Vec::new();
    let Some(root) = root else {
        return visited;
    };

    let mut stack = vec![root];
    let mut previously_visited: Option<&Node> = None;

    while let Some(&current) = stack.last() {
        match Phase::of(current, previously_visited) {
            Phase::Ascending => {
                stack.pop();
                visited.push(current.value());
            }
            Phase::Descending if current.is_leaf() => {
                stack.pop();
                visited.push(current.value());
            }
            Phase::Descending => {
                if let Some(right) = current.right() {
                    stack.push(right);
                }
                if let Some(left) = current.left() {
                    stack.push(left);
                }
            }
        }
        previously_visited = Some(current);
    }

    trace!(count = visited.len(), "postorder iterative done");
    visited
}
