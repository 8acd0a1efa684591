//! Cooperative cancellation primitive.
//!
//! A [`CancelToken`] is a cheap, cloneable flag that one thread raises and
//! workers poll. Raising it does not interrupt anything by itself; the
//! consumer decides where its checking points are. The pixel pipeline polls
//! once per image row, which bounds cancellation latency to one row's work.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Pollable cancellation signal shared between a controller and workers.
///
/// Clones share the same underlying flag. Once raised the token stays
/// raised; create a fresh token for the next run.
///
/// # Example
///
/// ```rust
/// use vibrance_core::CancelToken;
///
/// let token = CancelToken::new();
/// let worker = token.clone();
/// assert!(!worker.is_cancelled());
/// token.cancel();
/// assert!(worker.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the cancellation flag.
    ///
    /// Safe to call from any thread and more than once.
    #[inline]
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called on any clone.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
