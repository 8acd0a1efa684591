//! HSL - hue, saturation, lightness.
//!
//! Bi-hexcone sibling of HSV; same hue axis, saturation relative to the
//! distance from both black and white.
//!
//! # Range
//!
//! - H: [0, 360) degrees
//! - S, L: [0, 1]

use super::hsv::{hue_degrees, sector};

/// Decomposes gamma-encoded sRGB into (H, S, L).
pub fn hsl_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = hue_degrees(r, g, b, max, delta);
    let l = (max + min) / 2.0;
    let s = if delta <= 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    [h, s, l]
}

/// Recomposes (H, S, L) into gamma-encoded sRGB.
pub fn hsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let (r1, g1, b1) = sector(h, c);
    let m = l - c / 2.0;
    [r1 + m, g1 + m, b1 + m]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_values() {
        // Pure red: H 0, S 1, L 0.5
        assert_eq!(hsl_from_rgb([1.0, 0.0, 0.0]), [0.0, 1.0, 0.5]);
        // White has zero saturation, not NaN
        assert_eq!(hsl_from_rgb([1.0, 1.0, 1.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_roundtrip() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0];
                    let back = hsl_to_rgb(hsl_from_rgb(rgb));
                    for i in 0..3 {
                        assert_abs_diff_eq!(rgb[i], back[i], epsilon = 1e-12);
                    }
                }
            }
        }
    }
}
