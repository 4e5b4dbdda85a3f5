//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the analysis contracts.
/// These are independent of I/O and CLI concerns.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("top_n must be positive, got {0}")]
    InvalidTopN(usize),

    #[error("n-gram order must be positive, got {0}")]
    InvalidNgramOrder(usize),

    #[error("invalid outline at line {line}: {message}")]
    InvalidOutline { line: usize, message: String },

    #[error("tree already has a root")]
    RootExists,

    #[error("outline document contains no titles")]
    EmptyOutline,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
