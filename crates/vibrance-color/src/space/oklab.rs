//! Oklab, Oklch and Oklrch.
//!
//! Björn Ottosson's perceptual space over linear sRGB, its cylindrical form,
//! and the Oklrch variant that replaces L with the toe-compressed Lr for a
//! better match to CIELAB-style lightness near black.
//!
//! # Range (sRGB gamut)
//!
//! - L, Lr: [0, 1]
//! - C: [0, ~0.3225] - empirical maximum, see the adapter table
//! - H: [0, 360) degrees

use super::lab::{from_lch, to_lch};
use crate::srgb;

/// Converts linear sRGB to Oklab.
pub(crate) fn oklab_from_linear(c: [f64; 3]) -> [f64; 3] {
    let l = 0.4122214708 * c[0] + 0.5363325363 * c[1] + 0.0514459929 * c[2];
    let m = 0.2119034982 * c[0] + 0.6806995451 * c[1] + 0.1073969566 * c[2];
    let s = 0.0883024619 * c[0] + 0.2817188376 * c[1] + 0.6299787005 * c[2];

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    [
        0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    ]
}

/// Converts Oklab to linear sRGB (possibly out of gamut).
pub(crate) fn linear_from_oklab(c: [f64; 3]) -> [f64; 3] {
    let l_ = c[0] + 0.3963377774 * c[1] + 0.2158037573 * c[2];
    let m_ = c[0] - 0.1055613458 * c[1] - 0.0638541728 * c[2];
    let s_ = c[0] - 0.0894841775 * c[1] - 1.2914855480 * c[2];

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    [
        4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    ]
}

/// Lightness toe mapping Oklab L to the Lr estimate.
pub(crate) fn toe(x: f64) -> f64 {
    const K1: f64 = 0.206;
    const K2: f64 = 0.03;
    const K3: f64 = (1.0 + K1) / (1.0 + K2);
    0.5 * (K3 * x - K1 + ((K3 * x - K1) * (K3 * x - K1) + 4.0 * K2 * K3 * x).sqrt())
}

/// Inverse of [`toe`].
pub(crate) fn toe_inv(x: f64) -> f64 {
    const K1: f64 = 0.206;
    const K2: f64 = 0.03;
    const K3: f64 = (1.0 + K1) / (1.0 + K2);
    (x * x + K1 * x) / (K3 * (x + K2))
}

/// Decomposes gamma-encoded sRGB into (L, C, H).
pub fn oklch_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = oklab_from_linear(srgb::eotf_rgb(rgb));
    to_lch(l, a, b)
}

/// Recomposes (L, C, H) into gamma-encoded sRGB.
pub fn oklch_to_rgb(lch: [f64; 3]) -> [f64; 3] {
    srgb::oetf_rgb(linear_from_oklab(from_lch(lch)))
}

/// Decomposes gamma-encoded sRGB into (Lr, C, H).
pub fn oklrch_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = oklch_from_rgb(rgb);
    [toe(l), c, h]
}

/// Recomposes (Lr, C, H) into gamma-encoded sRGB.
pub fn oklrch_to_rgb(lch: [f64; 3]) -> [f64; 3] {
    let [lr, c, h] = lch;
    oklch_to_rgb([toe_inv(lr), c, h])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white_lightness_one() {
        let [l, c, _] = oklch_from_rgb([1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(l, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(c, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_magenta_is_chroma_peak() {
        // sRGB magenta attains the largest Oklch chroma in the 8-bit cube
        let [_, c, _] = oklch_from_rgb([1.0, 0.0, 1.0]);
        assert_abs_diff_eq!(c, 0.3225, epsilon = 1e-3);
    }

    #[test]
    fn test_toe_inverse() {
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            assert_abs_diff_eq!(toe_inv(toe(x)), x, epsilon = 1e-12);
        }
        assert_eq!(toe(0.0), 0.0);
        assert_abs_diff_eq!(toe(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_roundtrip() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0];
                    let lch = oklch_to_rgb(oklch_from_rgb(rgb));
                    let lrch = oklrch_to_rgb(oklrch_from_rgb(rgb));
                    for i in 0..3 {
                        assert_abs_diff_eq!(rgb[i], lch[i], epsilon = 1e-8);
                        assert_abs_diff_eq!(rgb[i], lrch[i], epsilon = 1e-8);
                    }
                }
            }
        }
    }
}
