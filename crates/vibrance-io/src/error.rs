//! Error types for I/O operations.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding error.
    #[error("decode error: {0}")]
    Decode(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    Encode(String),

    /// Unknown save format name.
    #[error("unknown save format: '{0}'")]
    UnknownFormat(String),

    /// The input path has no usable file name.
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
