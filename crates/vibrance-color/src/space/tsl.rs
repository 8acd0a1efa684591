//! TSL - tint, saturation, lightness.
//!
//! Chromaticity-plane space from the face-detection literature. Tint is the
//! angle of the (r', g') chromaticity offset from the neutral point, wrapped
//! to [0, 1); saturation is the scaled radial distance; lightness is Rec.601
//! luma over the gamma-encoded channels.
//!
//! # Range
//!
//! - T: [0, 1)
//! - S: [0, 1]
//! - L: [0, 1]
//!
//! Black has no chromaticity at all and decomposes to (0, 0, 0); other
//! neutral grays land on the achromatic axis as (0.25, 0, luma).

use std::f64::consts::PI;

const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Decomposes gamma-encoded sRGB into (T, S, L).
pub fn tsl_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let sum = r + g + b;
    if sum <= 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let r1 = r / sum - 1.0 / 3.0;
    let g1 = g / sum - 1.0 / 3.0;

    let mut t = r1.atan2(g1) / (2.0 * PI) + 0.25;
    if t < 0.0 {
        t += 1.0;
    }
    let s = (9.0 / 5.0 * (r1 * r1 + g1 * g1)).sqrt();
    let l = LUMA_R * r + LUMA_G * g + LUMA_B * b;
    [t, s, l]
}

/// Recomposes (T, S, L) into gamma-encoded sRGB.
pub fn tsl_to_rgb(tsl: [f64; 3]) -> [f64; 3] {
    let [t, s, l] = tsl;
    if s <= 0.0 {
        // Neutral: luma weights sum to 1, so the gray level equals L.
        return [l, l, l];
    }
    let angle = 2.0 * PI * (t - 0.25);
    let rho = s * 5.0_f64.sqrt() / 3.0;
    let r1 = rho * angle.sin();
    let g1 = rho * angle.cos();

    let rf = r1 + 1.0 / 3.0;
    let gf = g1 + 1.0 / 3.0;
    let bf = 1.0 - rf - gf;
    let denom = LUMA_R * rf + LUMA_G * gf + LUMA_B * bf;
    if denom <= 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let sum = l / denom;
    [rf * sum, gf * sum, bf * sum]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_black_degenerate() {
        assert_eq!(tsl_from_rgb([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(tsl_to_rgb([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_gray_is_achromatic() {
        let [_, s, l] = tsl_from_rgb([0.5, 0.5, 0.5]);
        assert_abs_diff_eq!(s, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(l, 0.5, epsilon = 1e-15);
        let back = tsl_to_rgb([0.0, 0.0, 0.5]);
        for v in back {
            assert_abs_diff_eq!(v, 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_luma_channel() {
        let [_, _, l] = tsl_from_rgb([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(l, 0.299, epsilon = 1e-15);
    }

    #[test]
    fn test_roundtrip() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0];
                    let back = tsl_to_rgb(tsl_from_rgb(rgb));
                    for i in 0..3 {
                        assert_abs_diff_eq!(rgb[i], back[i], epsilon = 1e-10);
                    }
                }
            }
        }
    }
}
