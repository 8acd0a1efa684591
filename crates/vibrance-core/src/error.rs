//! Error types for vibrance-core operations.

use thiserror::Error;

/// Result type alias using [`CoreError`] as the error type.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors produced by the core buffer types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Buffer length does not match the declared dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Reason why the dimensions are invalid.
        reason: String,
    },
}

impl CoreError {
    /// Creates an [`CoreError::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = CoreError::invalid_dimensions(10, 20, "expected 800 samples, got 4");
        let msg = err.to_string();
        assert!(msg.contains("10x20"));
        assert!(msg.contains("800"));
    }
}
