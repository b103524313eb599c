//! Rooms CLI — host error types.

use rooms_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the host.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The sequencer, presenter or settings store failed.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Console I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
