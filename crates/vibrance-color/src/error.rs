//! Error types for color operations.

use thiserror::Error;

/// Color operation error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// The requested color space name is not registered.
    ///
    /// Raised by name lookup only; numeric edge cases inside a conversion
    /// are resolved locally and never surface as errors.
    #[error("unknown color space: '{0}'")]
    UnknownColorSpace(String),

    /// Gain value outside the accepted [-1, 1] range.
    #[error("gain {0} out of range [-1, 1]")]
    GainOutOfRange(f64),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
