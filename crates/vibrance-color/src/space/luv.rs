//! CIELUV and its cylindrical form LCHuv.
//!
//! # Range (sRGB gamut)
//!
//! - L: [0, 100]
//! - C: [0, ~179] - empirical in-gamut maximum, see the adapter table
//! - H: [0, 360) degrees

use super::lab::{from_lch, to_lch};
use super::xyz::{self, WHITE};
use crate::srgb;

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

#[inline]
fn uv_prime(xyz: [f64; 3]) -> (f64, f64) {
    let denom = xyz[0] + 15.0 * xyz[1] + 3.0 * xyz[2];
    if denom <= 0.0 {
        return (0.0, 0.0);
    }
    (4.0 * xyz[0] / denom, 9.0 * xyz[1] / denom)
}

/// Decomposes gamma-encoded sRGB into (L, u, v).
pub fn luv_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let xyz = xyz::xyz_from_linear(srgb::eotf_rgb(rgb));
    let (up, vp) = uv_prime(xyz);
    let (unp, vnp) = uv_prime(WHITE);

    let y = xyz[1] / WHITE[1];
    let l = if y > EPSILON {
        116.0 * y.cbrt() - 16.0
    } else {
        KAPPA * y
    };
    [l, 13.0 * l * (up - unp), 13.0 * l * (vp - vnp)]
}

/// Recomposes (L, u, v) into gamma-encoded sRGB.
pub fn luv_to_rgb(luv: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv;
    if l <= 0.0 {
        return srgb::oetf_rgb(xyz::linear_from_xyz([0.0, 0.0, 0.0]));
    }
    let (unp, vnp) = uv_prime(WHITE);
    let up = u / (13.0 * l) + unp;
    let vp = v / (13.0 * l) + vnp;

    let y = if l > 8.0 {
        WHITE[1] * ((l + 16.0) / 116.0).powi(3)
    } else {
        WHITE[1] * l / KAPPA
    };
    let (x, z) = if vp <= 0.0 {
        (0.0, 0.0)
    } else {
        (
            y * 9.0 * up / (4.0 * vp),
            y * (12.0 - 3.0 * up - 20.0 * vp) / (4.0 * vp),
        )
    };
    srgb::oetf_rgb(xyz::linear_from_xyz([x, y, z]))
}

/// Decomposes gamma-encoded sRGB into (L, C, H).
pub fn lchuv_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [l, u, v] = luv_from_rgb(rgb);
    to_lch(l, u, v)
}

/// Recomposes (L, C, H) into gamma-encoded sRGB.
pub fn lchuv_to_rgb(lch: [f64; 3]) -> [f64; 3] {
    luv_to_rgb(from_lch(lch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_red_carries_max_chroma() {
        // sRGB red is the most chromatic 8-bit color in CIELUV
        let [_, c, _] = lchuv_from_rgb([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(c, 179.0, epsilon = 0.5);
    }

    #[test]
    fn test_black_degenerate() {
        let [l, u, v] = luv_from_rgb([0.0, 0.0, 0.0]);
        assert_eq!([l, u, v], [0.0, 0.0, 0.0]);
        let back = luv_to_rgb([0.0, 0.0, 0.0]);
        for ch in back {
            assert_abs_diff_eq!(ch, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_roundtrip() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0];
                    let back = lchuv_to_rgb(lchuv_from_rgb(rgb));
                    for i in 0..3 {
                        assert_abs_diff_eq!(rgb[i], back[i], epsilon = 1e-9);
                    }
                }
            }
        }
    }
}
