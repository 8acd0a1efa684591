//! Error types for pipeline operations.

use thiserror::Error;

/// Error type for pipeline operations.
#[derive(Error, Debug)]
pub enum OpsError {
    /// The cancellation token was raised before the run completed.
    ///
    /// Expected and cooperative - the orchestration layer treats it as
    /// "nothing happened, try again", never as a failure to report. The
    /// buffer may hold a mix of transformed and untouched rows and should
    /// be discarded.
    #[error("operation cancelled")]
    Cancelled,
}

/// Result type for pipeline operations.
pub type OpsResult<T> = Result<T, OpsError>;
