//! Domain layer: tree model and traversal algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod fixture;
pub mod node;
pub mod traversal;

pub use error::{DomainError, DomainResult};
pub use fixture::sample_tree;
pub use node::{data_label, Node};
pub use traversal::{
    inorder_iterative, inorder_recursive, postorder_iterative, postorder_recursive,
    preorder_iterative, preorder_recursive, traverse, Order, Strategy,
};
