//! Core error types

use thiserror::Error;

/// Errors raised by core runtime primitives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A frame timer was configured with a zero-length interval
    #[error("frame timer interval must be greater than zero")]
    ZeroInterval,

    /// A subscription handle was used after it had already been closed
    #[error("subscription handle is no longer registered")]
    StaleHandle,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
