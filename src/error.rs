//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Capacity must allow at least one entry
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Policy name not recognised
    #[error("Unknown eviction policy: {0}")]
    UnknownPolicy(String),

    /// Malformed console command
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Page number, page size or start index out of range
    #[error("Invalid page: {0}")]
    InvalidPage(String),

    /// Store and eviction metadata disagree
    #[error("Invariant violated: {0}")]
    Invariant(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
