//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from wordchunk operations.
#[derive(Debug, thiserror::Error)]
pub enum WordchunkError {
    /// The merge budget was negative.
    #[error("invalid configuration: num_merges ({num_merges}) must be >= 0")]
    InvalidConfiguration {
        /// The rejected merge budget.
        num_merges: i64,
    },

    /// Input bytes were not valid UTF-8.
    #[error("encoding error: {0}")]
    Encoding(#[from] core::str::Utf8Error),

    /// A regex pattern failed to compile, or a match failed.
    #[error("regex error: {0}")]
    Regex(#[from] ErrorWrapper),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for wordchunk operations.
pub type WCResult<T> = core::result::Result<T, WordchunkError>;
