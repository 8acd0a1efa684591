//! HSI - hue, saturation, intensity.
//!
//! Intensity is the plain channel mean; saturation measures how far the
//! smallest channel sits below it. The hue axis is the same hexagonal hue
//! as HSV, and the recomposition is derived against that hue so the pair
//! round-trips exactly.
//!
//! # Range
//!
//! - H: [0, 360) degrees
//! - S: [0, 1]
//! - I: [0, 1]
//!
//! Black (I = 0) has neither hue nor saturation and decomposes to (0, 0, 0).

use super::hsv::{hue_degrees, sector};

/// Decomposes gamma-encoded sRGB into (H, S, I).
pub fn hsi_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let i = (r + g + b) / 3.0;
    if i <= 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let h = hue_degrees(r, g, b, max, max - min);
    let s = 1.0 - min / i;
    [h, s, i]
}

/// Recomposes (H, S, I) into gamma-encoded sRGB.
pub fn hsi_to_rgb(hsi: [f64; 3]) -> [f64; 3] {
    let [h, s, i] = hsi;
    let hp = h.rem_euclid(360.0) / 60.0;
    let z = 1.0 - (hp % 2.0 - 1.0).abs();
    let c = 3.0 * i * s / (1.0 + z);
    let (r1, g1, b1) = sector(h, c);
    let m = i * (1.0 - s);
    [r1 + m, g1 + m, b1 + m]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gray_and_black() {
        assert_eq!(hsi_from_rgb([0.5, 0.5, 0.5]), [0.0, 0.0, 0.5]);
        assert_eq!(hsi_from_rgb([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(hsi_to_rgb([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_red_intensity_third() {
        let [h, s, i] = hsi_from_rgb([1.0, 0.0, 0.0]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 1.0);
        assert_abs_diff_eq!(i, 1.0 / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn test_roundtrip() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0];
                    let back = hsi_to_rgb(hsi_from_rgb(rgb));
                    for i in 0..3 {
                        assert_abs_diff_eq!(rgb[i], back[i], epsilon = 1e-12);
                    }
                }
            }
        }
    }
}
