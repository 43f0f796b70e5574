//! Error types for the stopover feed grouping library.

use thiserror::Error;

/// Primary error type for feed loading operations.
///
/// The grouping engine itself is total over well-typed input and never
/// fails; errors only arise when reading a feed from an external source.
#[derive(Error, Debug)]
pub enum StopoverError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed feed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using StopoverError.
pub type Result<T> = std::result::Result<T, StopoverError>;
