//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violated traversal preconditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{traversal} requires a non-empty tree")]
    EmptyTree { traversal: &'static str },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
