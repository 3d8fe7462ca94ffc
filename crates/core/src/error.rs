//! Error types for the catalog engine
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Absence is never an error: point lookups return `Ok(None)` and callers
//! distinguish "absent" from "error" structurally.

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the catalog engine
#[derive(Debug, Error)]
pub enum Error {
    /// Record store operation failed; fatal to the enclosing call
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Search index operation failed; swallowed after a successful store step
    #[error("Index error: {0}")]
    IndexError(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Caller-input rejected at the boundary before the core runs
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
