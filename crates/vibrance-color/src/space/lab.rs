//! CIELAB and its cylindrical form LCHab.
//!
//! # Range (sRGB gamut)
//!
//! - L: [0, 100]
//! - C: [0, ~134] - the exact in-gamut maximum is empirical, see the
//!   adapter table's calibrated constant
//! - H: [0, 360) degrees

use super::xyz::{self, WHITE};
use crate::srgb;

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > EPSILON {
        t3
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

/// Decomposes gamma-encoded sRGB into (L, a, b).
pub fn lab_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let xyz = xyz::xyz_from_linear(srgb::eotf_rgb(rgb));
    let fx = f(xyz[0] / WHITE[0]);
    let fy = f(xyz[1] / WHITE[1]);
    let fz = f(xyz[2] / WHITE[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Recomposes (L, a, b) into gamma-encoded sRGB.
pub fn lab_to_rgb(lab: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab;
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;
    let xyz = [
        f_inv(fx) * WHITE[0],
        f_inv(fy) * WHITE[1],
        f_inv(fz) * WHITE[2],
    ];
    srgb::oetf_rgb(xyz::linear_from_xyz(xyz))
}

/// Decomposes gamma-encoded sRGB into (L, C, H).
pub fn lchab_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = lab_from_rgb(rgb);
    to_lch(l, a, b)
}

/// Recomposes (L, C, H) into gamma-encoded sRGB.
pub fn lchab_to_rgb(lch: [f64; 3]) -> [f64; 3] {
    let [l, a, b] = from_lch(lch);
    lab_to_rgb([l, a, b])
}

/// (L, a, b)-style rectangular to cylindrical, shared with Luv.
pub(crate) fn to_lch(l: f64, a: f64, b: f64) -> [f64; 3] {
    let c = a.hypot(b);
    let mut h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    [l, c, h]
}

/// Cylindrical back to rectangular, shared with Luv.
pub(crate) fn from_lch(lch: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lch;
    let hr = h.to_radians();
    [l, c * hr.cos(), c * hr.sin()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white_and_black() {
        let [l, a, b] = lab_from_rgb([1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(l, 100.0, epsilon = 0.05);
        assert_abs_diff_eq!(a, 0.0, epsilon = 0.05);
        assert_abs_diff_eq!(b, 0.0, epsilon = 0.05);
        let [l, _, _] = lab_from_rgb([0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(l, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_blue_carries_max_chroma() {
        // sRGB blue is the most chromatic 8-bit color in CIELAB
        let [_, c, _] = lchab_from_rgb([0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(c, 133.8, epsilon = 0.5);
    }

    #[test]
    fn test_roundtrip() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0];
                    let back = lchab_to_rgb(lchab_from_rgb(rgb));
                    for i in 0..3 {
                        assert_abs_diff_eq!(rgb[i], back[i], epsilon = 1e-9);
                    }
                }
            }
        }
    }
}
