//! Traversal engine: three visit orders, each recursive and stack based

mod iterative;
mod recursive;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainResult, Node};

pub use iterative::{inorder_iterative, postorder_iterative, preorder_iterative};
pub use recursive::{inorder_recursive, postorder_recursive, preorder_recursive};

/// Position of a node's own visit relative to its subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// node, left subtree, right subtree
    Preorder,
    /// left subtree, node, right subtree
    Inorder,
    /// left subtree, right subtree, node
    Postorder,
}

impl Order {
    pub const ALL: [Order; 3] = [Order::Preorder, Order::Inorder, Order::Postorder];
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Order::Preorder => "Preorder",
            Order::Inorder => "Inorder",
            Order::Postorder => "Postorder",
        };
        f.write_str(name)
    }
}

/// Where pending nodes are kept during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// The call stack
    Recursive,
    /// An explicit, locally owned stack
    Iterative,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Recursive, Strategy::Iterative];
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Recursive => "Recursive",
            Strategy::Iterative => "Iterative",
        };
        f.write_str(name)
    }
}

/// Visit every node below `root` in the given order.
///
/// Only the iterative preorder rejects an absent root; every other
/// combination returns an empty sequence for it.
pub fn traverse(root: Option<&Node>, order: Order, strategy: Strategy) -> DomainResult<Vec<i32>> {
    let visited = match (order, strategy) {
        (Order::Preorder, Strategy::Recursive) => preorder_recursive(root),
        (Order::Preorder, Strategy::Iterative) => preorder_iterative(root)?,
        (Order::Inorder, Strategy::Recursive) => inorder_recursive(root),
        (Order::Inorder, Strategy::Iterative) => inorder_iterative(root),
        (Order::Postorder, Strategy::Recursive) => postorder_recursive(root),
        (Order::Postorder, Strategy::Iterative) => postorder_iterative(root),
    };
    Ok(visited)
}
