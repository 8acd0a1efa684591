//! Row-parallel in-place application of a saturation engine.
//!
//! Rows are independent: no pixel reads its neighbors, and
//! `par_chunks_mut` hands every worker a disjoint row slice, so the only
//! mutable resource is partitioned without locks. The cancellation token is
//! polled once per row, not per pixel - that bounds cancellation latency to
//! one row's work while keeping the poll off the per-pixel path.
//!
//! Cancellation is an outcome, not a failure: the caller gets
//! [`OpsError::Cancelled`] instead of a silently partial image. Rows that
//! had already started may be finished or untouched, but no row is ever
//! left half-written.

use rayon::prelude::*;
use tracing::trace;

use vibrance_color::SaturationEngine;
use vibrance_core::{CancelToken, PixelBuffer};

use crate::{OpsError, OpsResult};

/// Applies `engine` to every pixel of `image` in place.
///
/// An identity engine (gain 0) returns immediately without touching the
/// buffer - callers that want to skip even the scheduling overhead can
/// check [`SaturationEngine::is_identity`] themselves.
///
/// # Errors
///
/// Returns [`OpsError::Cancelled`] if `token` is raised before the run
/// completes; the buffer contents are then unspecified (each row is either
/// fully transformed or untouched) and should be discarded.
pub fn apply(
    image: &mut PixelBuffer,
    engine: &SaturationEngine,
    token: &CancelToken,
) -> OpsResult<()> {
    if engine.is_identity() || image.is_empty() {
        return Ok(());
    }
    trace!(
        width = image.width(),
        height = image.height(),
        "pipeline::apply"
    );

    let row_len = image.row_len();
    image
        .data_mut()
        .par_chunks_mut(row_len)
        .try_for_each(|row| {
            if token.is_cancelled() {
                return Err(OpsError::Cancelled);
            }
            for px in row.chunks_exact_mut(PixelBuffer::CHANNELS) {
                let out = engine.apply_pixel([px[0], px[1], px[2], px[3]]);
                px.copy_from_slice(&out);
            }
            Ok(())
        })
}
