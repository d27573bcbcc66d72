//! Binary tree traversals.
//!
//! Preorder, inorder and postorder over a [`domain::Node`] tree, each as a
//! recursive function and as a loop over an explicit stack. The `treewalk`
//! binary runs them against a fixed sample tree.
//!
//! ```
//! use treewalk::domain::{sample_tree, traverse, Order, Strategy};
//!
//! let root = sample_tree();
//! let visited = traverse(Some(&root), Order::Postorder, Strategy::Iterative).unwrap();
//! assert_eq!(visited, vec![22, 15, 30, 20, 40, 50, 25]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
