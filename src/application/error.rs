//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{DomainError, Order};

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("config error: {message}")]
    Config { message: String },

    #[error("{order} traversal mismatch: recursive {recursive:?}, iterative {iterative:?}")]
    Mismatch {
        order: Order,
        recursive: Vec<i32>,
        iterative: Vec<i32>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
