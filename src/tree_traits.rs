//! Conversion of binary trees into printable `termtree` trees

use termtree::Tree;
use tracing::instrument;

use crate::domain::Node;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl TreeNodeConvert for Node {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        subtree(self, self.value().to_string())
    }
}

// Side markers keep a lone child's position visible
fn subtree(node: &Node, label: String) -> Tree<String> {
    let mut leaves = Vec::new();
    if let Some(left) = node.left() {
        leaves.push(subtree(left, format!("L: {}", left.value())));
    }
    if let Some(right) = node.right() {
        leaves.push(subtree(right, format!("R: {}", right.value())));
    }
    Tree::new(label).with_leaves(leaves)
}

impl TreeNodeConvert for Option<&Node> {
    fn to_tree_string(&self) -> Tree<String> {
        match self {
            Some(node) => node.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}
