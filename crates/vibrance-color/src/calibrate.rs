//! Offline normalization search.
//!
//! Walks the full 8-bit RGB cube, decomposes every triple in every
//! registered space, and records the largest chroma value seen per space
//! together with the triple that attained it. The resulting values are the
//! `*_MAX_*` constants in the adapter table; this search exists so they can
//! be regenerated instead of guessed whenever a conversion definition
//! changes or a new space is registered.
//!
//! This is a build-time/maintenance procedure, reachable only through the
//! `calibrate` CLI subcommand - never on the interactive path. The full
//! cube is 16.7M triples across fourteen spaces, so expect minutes, not
//! milliseconds.
//!
//! The reduction is an embarrassingly parallel fold: each worker keeps a
//! local best-per-space array updated with "replace if strictly greater",
//! and the merge takes the element-wise max with the same comparison. The
//! maximum **value** is deterministic; when two triples tie, which one is
//! reported depends on how rayon partitioned the cube.

use rayon::prelude::*;

use crate::adapter::ColorSpace;

/// Per-space outcome of the exhaustive search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationResult {
    /// The space whose chroma channel was scanned.
    pub space: ColorSpace,
    /// Largest chroma/saturation value found in the cube.
    pub max_value: f64,
    /// A triple attaining the maximum (not unique under ties).
    pub attaining_rgb: (u8, u8, u8),
}

/// One worker-local or merged best-so-far table.
type Best = [(f64, (u8, u8, u8)); 14];

const EMPTY: Best = [(f64::MIN, (0, 0, 0)); 14];

#[inline]
fn update(best: &mut Best, idx: usize, value: f64, rgb: (u8, u8, u8)) {
    if value > best[idx].0 {
        best[idx] = (value, rgb);
    }
}

#[inline]
fn merge(mut a: Best, b: Best) -> Best {
    for i in 0..14 {
        if b[i].0 > a[i].0 {
            a[i] = b[i];
        }
    }
    a
}

/// Scans the full 8-bit cube.
pub fn calibrate() -> Vec<CalibrationResult> {
    calibrate_with_step(1)
}

/// Scans a subsampled cube: every `step`-th code value per axis, with 255
/// always included so the cube corners are never skipped.
///
/// `step` = 1 is the real calibration; larger steps are for smoke tests
/// and quick sanity checks of a changed conversion.
pub fn calibrate_with_step(step: usize) -> Vec<CalibrationResult> {
    let step = step.max(1);
    let mut axis: Vec<u8> = (0..256).step_by(step).map(|v| v as u8).collect();
    if *axis.last().unwrap() != 255 {
        axis.push(255);
    }

    let best = axis
        .par_iter()
        .map(|&r| {
            let mut local = EMPTY;
            for &g in &axis {
                for &b in &axis {
                    let rgb = [r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0];
                    for (idx, space) in ColorSpace::ALL.iter().enumerate() {
                        let adapter = space.adapter();
                        let comps = (adapter.decompose)(rgb);
                        let value = comps[adapter.chroma_index];
                        if value.is_finite() {
                            update(&mut local, idx, value, (r, g, b));
                        }
                    }
                }
            }
            local
        })
        .reduce(|| EMPTY, merge);

    ColorSpace::ALL
        .iter()
        .enumerate()
        .map(|(idx, &space)| CalibrationResult {
            space,
            max_value: best[idx].0,
            attaining_rgb: best[idx].1,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::OKLCH_MAX_CHROMA;
    use approx::assert_abs_diff_eq;

    fn result_for(results: &[CalibrationResult], space: ColorSpace) -> CalibrationResult {
        *results.iter().find(|r| r.space == space).unwrap()
    }

    #[test]
    fn test_oklch_maximum_is_magenta() {
        // Coarse grid still contains the cube corners, and the Oklch peak
        // sits exactly on the magenta corner
        let results = calibrate_with_step(51);
        let oklch = result_for(&results, ColorSpace::Oklch);
        assert_eq!(oklch.attaining_rgb, (255, 0, 255));

        let direct = (ColorSpace::Oklch.adapter().decompose)([1.0, 0.0, 1.0])[1];
        assert_eq!(oklch.max_value, direct);
        assert_abs_diff_eq!(oklch.max_value, OKLCH_MAX_CHROMA, epsilon = 2e-3);
    }

    #[test]
    fn test_bounded_spaces_peak_at_one() {
        let results = calibrate_with_step(51);
        for space in [ColorSpace::Hsv, ColorSpace::Hsl, ColorSpace::Hsi] {
            let r = result_for(&results, space);
            assert_abs_diff_eq!(r.max_value, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_every_space_reports_a_maximum() {
        let results = calibrate_with_step(85);
        assert_eq!(results.len(), 14);
        for r in &results {
            assert!(r.max_value > 0.0, "{}: no maximum found", r.space.name());
        }
    }

    #[test]
    fn test_step_does_not_change_corner_maxima() {
        // 51 and 85 both divide 255; the corners are in both grids, so a
        // corner-attained maximum must be identical
        let coarse = result_for(&calibrate_with_step(85), ColorSpace::Oklch);
        let fine = result_for(&calibrate_with_step(51), ColorSpace::Oklch);
        assert_eq!(coarse.max_value, fine.max_value);
    }
}
