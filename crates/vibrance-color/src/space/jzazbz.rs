//! Jzazbz and its cylindrical form JzCzHz.
//!
//! Safdar et al. 2017. Jzazbz is defined over absolute luminance with a
//! PQ-style nonlinearity, so the relative XYZ from the sRGB matrices is
//! scaled to cd/m² first. SDR diffuse white is mapped to 203 cd/m²
//! (ITU-R BT.2408); change [`WHITE_LUMINANCE`] and the calibrated JzCzHz
//! constant must be re-derived.
//!
//! # Range (sRGB gamut at 203 cd/m²)
//!
//! - Jz: [0, ~0.22]
//! - Cz: [0, ~0.19] - empirical maximum, see the adapter table
//! - Hz: [0, 360) degrees

use std::sync::LazyLock;

use super::lab::{from_lch, to_lch};
use super::xyz::{self, invert, mul};
use crate::srgb;

/// Absolute luminance of diffuse white, cd/m².
pub const WHITE_LUMINANCE: f64 = 203.0;

const B: f64 = 1.15;
const G: f64 = 0.66;
const C1: f64 = 3424.0 / 4096.0;
const C2: f64 = 2413.0 / 128.0;
const C3: f64 = 2392.0 / 128.0;
const N: f64 = 2610.0 / 16384.0;
const P: f64 = 1.7 * 2523.0 / 32.0;
const D: f64 = -0.56;
const D0: f64 = 1.629_549_953_282_156_6e-11;

const XYZP_TO_LMS: [[f64; 3]; 3] = [
    [0.41478972, 0.579999, 0.0146480],
    [-0.20151000, 1.120649, 0.0531008],
    [-0.01660080, 0.264800, 0.6684799],
];

// Iz row is fixed; az/bz rows are the published opponent axes.
const LMS_TO_IAB: [[f64; 3]; 3] = [
    [0.5, 0.5, 0.0],
    [3.524000, -4.066708, 0.542708],
    [0.199076, 1.096799, -1.295875],
];

static LMS_FROM_XYZP_INV: LazyLock<[[f64; 3]; 3]> = LazyLock::new(|| invert(&XYZP_TO_LMS));
static IAB_TO_LMS: LazyLock<[[f64; 3]; 3]> = LazyLock::new(|| invert(&LMS_TO_IAB));

#[inline]
fn pq(v: f64) -> f64 {
    let x = (v.max(0.0) / 10000.0).powf(N);
    ((C1 + C2 * x) / (1.0 + C3 * x)).powf(P)
}

#[inline]
fn pq_inv(v: f64) -> f64 {
    let vp = v.max(0.0).powf(1.0 / P);
    let x = (C1 - vp) / (C3 * vp - C2);
    10000.0 * x.max(0.0).powf(1.0 / N)
}

/// Decomposes gamma-encoded sRGB into (Jz, az, bz).
pub fn jzazbz_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let rel = xyz::xyz_from_linear(srgb::eotf_rgb(rgb));
    let [x, y, z] = [
        rel[0] * WHITE_LUMINANCE,
        rel[1] * WHITE_LUMINANCE,
        rel[2] * WHITE_LUMINANCE,
    ];
    let xp = B * x - (B - 1.0) * z;
    let yp = G * y - (G - 1.0) * x;
    let lms = mul(&XYZP_TO_LMS, [xp, yp, z]);
    let lms_p = [pq(lms[0]), pq(lms[1]), pq(lms[2])];

    let [iz, az, bz] = mul(&LMS_TO_IAB, lms_p);
    let jz = (1.0 + D) * iz / (1.0 + D * iz) - D0;
    [jz, az, bz]
}

/// Recomposes (Jz, az, bz) into gamma-encoded sRGB.
pub fn jzazbz_to_rgb(jab: [f64; 3]) -> [f64; 3] {
    let [jz, az, bz] = jab;
    let jz = jz + D0;
    let iz = jz / (1.0 + D - D * jz);

    let lms_p = mul(&IAB_TO_LMS, [iz, az, bz]);
    let lms = [pq_inv(lms_p[0]), pq_inv(lms_p[1]), pq_inv(lms_p[2])];

    let [xp, yp, zp] = mul(&LMS_FROM_XYZP_INV, lms);
    let x = (xp + (B - 1.0) * zp) / B;
    let y = (yp + (G - 1.0) * x) / G;
    let rel = [
        x / WHITE_LUMINANCE,
        y / WHITE_LUMINANCE,
        zp / WHITE_LUMINANCE,
    ];
    srgb::oetf_rgb(xyz::linear_from_xyz(rel))
}

/// Decomposes gamma-encoded sRGB into (Jz, Cz, Hz).
pub fn jzczhz_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [jz, az, bz] = jzazbz_from_rgb(rgb);
    to_lch(jz, az, bz)
}

/// Recomposes (Jz, Cz, Hz) into gamma-encoded sRGB.
pub fn jzczhz_to_rgb(jch: [f64; 3]) -> [f64; 3] {
    jzazbz_to_rgb(from_lch(jch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_white_is_achromatic() {
        let [jz, az, bz] = jzazbz_from_rgb([1.0, 1.0, 1.0]);
        assert!(jz > 0.1 && jz < 0.3, "jz={}", jz);
        assert_abs_diff_eq!(az, 0.0, epsilon = 2e-4);
        assert_abs_diff_eq!(bz, 0.0, epsilon = 2e-4);
    }

    #[test]
    fn test_black_maps_to_origin() {
        let [jz, az, bz] = jzazbz_from_rgb([0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(jz, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(az, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(bz, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_jz_monotonic_in_gray_level() {
        let mut prev = -1.0;
        for i in 0..=10 {
            let v = i as f64 / 10.0;
            let [jz, _, _] = jzazbz_from_rgb([v, v, v]);
            assert!(jz > prev, "jz not monotonic at {}", v);
            prev = jz;
        }
    }

    #[test]
    fn test_roundtrip() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0];
                    let back = jzczhz_to_rgb(jzczhz_from_rgb(rgb));
                    for i in 0..3 {
                        assert_abs_diff_eq!(rgb[i], back[i], epsilon = 1e-6);
                    }
                }
            }
        }
    }
}
