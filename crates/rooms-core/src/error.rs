//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A caller supplied a value outside the accepted domain
    /// (e.g. a jump target below room 1).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A settings store or engine collaborator failed.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
