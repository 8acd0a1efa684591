//! HSLuv and HPLuv - human-friendly CIELUV cylinders.
//!
//! Both reshape LCHuv chroma against the sRGB gamut boundary, which in the
//! Luv chromaticity plane is exactly six straight lines per lightness (one
//! per RGB channel hitting 0 or 1):
//!
//! - **HSLuv** scales chroma by the maximum chroma available at the pixel's
//!   lightness *and hue*, so saturation is a fraction of what that exact hue
//!   can display. Returned here in [0, 1].
//! - **HPLuv** scales by the maximum chroma safe across *all* hues at that
//!   lightness (the inscribed circle), on the reference 0-100 scale. Values
//!   far above 100 are normal for saturated corners; the adapter table
//!   carries the calibrated in-gamut maximum.
//!
//! # Reference
//!
//! Alexei Boronine's HSLuv reference implementation, rev4.

use super::luv::{lchuv_from_rgb, lchuv_to_rgb};

// XYZ -> linear sRGB rows from the reference implementation; kept verbatim
// so the bounding lines match other HSLuv implementations bit-for-bit.
const M: [[f64; 3]; 3] = [
    [3.240969941904521, -1.537383177570093, -0.498610760293],
    [-0.96924363628087, 1.87596750150772, 0.041555057407175],
    [0.055630079696993, -0.20397695888897, 1.056971514242878],
];
const KAPPA: f64 = 903.2962962;
const EPSILON: f64 = 0.0088564516;

/// A chroma bound in the (C·cos h, C·sin h) plane.
#[derive(Debug, Clone, Copy)]
struct Line {
    slope: f64,
    intercept: f64,
}

/// The six gamut edges for a given lightness.
fn bounds(l: f64) -> [Line; 6] {
    let mut out = [Line {
        slope: 0.0,
        intercept: 0.0,
    }; 6];
    let sub1 = (l + 16.0).powi(3) / 1_560_896.0;
    let sub2 = if sub1 > EPSILON { sub1 } else { l / KAPPA };

    for (ch, m) in M.iter().enumerate() {
        let [m1, m2, m3] = *m;
        for t in 0..2 {
            let tf = t as f64;
            let top1 = (284_517.0 * m1 - 94_839.0 * m3) * sub2;
            let top2 =
                (838_422.0 * m3 + 769_860.0 * m2 + 731_718.0 * m1) * l * sub2 - 769_860.0 * tf * l;
            let bottom = (632_260.0 * m3 - 126_452.0 * m2) * sub2 + 126_452.0 * tf;
            out[ch * 2 + t] = Line {
                slope: top1 / bottom,
                intercept: top2 / bottom,
            };
        }
    }
    out
}

/// Maximum in-gamut chroma at lightness `l` along hue `h` (degrees).
fn max_chroma_for_lh(l: f64, h: f64) -> f64 {
    let hrad = h.to_radians();
    let (sin_h, cos_h) = hrad.sin_cos();
    bounds(l)
        .iter()
        .filter_map(|line| {
            let len = line.intercept / (sin_h - line.slope * cos_h);
            (len >= 0.0).then_some(len)
        })
        .fold(f64::MAX, f64::min)
}

/// Maximum chroma in gamut at lightness `l` for every hue at once.
fn max_safe_chroma_for_l(l: f64) -> f64 {
    bounds(l)
        .iter()
        .map(|line| line.intercept.abs() / (line.slope * line.slope + 1.0).sqrt())
        .fold(f64::MAX, f64::min)
}

/// Lightness close enough to the gamut apex that chroma is meaningless.
#[inline]
fn degenerate_l(l: f64) -> bool {
    !(1e-8..=99.999_999_9).contains(&l)
}

/// Decomposes gamma-encoded sRGB into (H, S, L) with S in [0, 1].
pub fn hsluv_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lchuv_from_rgb(rgb);
    let s = if degenerate_l(l) {
        0.0
    } else {
        c / max_chroma_for_lh(l, h)
    };
    [h, s, l]
}

/// Recomposes (H, S, L) with S in [0, 1] into gamma-encoded sRGB.
pub fn hsluv_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    let c = if degenerate_l(l) {
        0.0
    } else {
        s * max_chroma_for_lh(l, h)
    };
    lchuv_to_rgb([l, c, h])
}

/// Decomposes gamma-encoded sRGB into (H, P, L) with P on the 0-100 scale.
pub fn hpluv_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let [l, c, h] = lchuv_from_rgb(rgb);
    let p = if degenerate_l(l) {
        0.0
    } else {
        c / max_safe_chroma_for_l(l) * 100.0
    };
    [h, p, l]
}

/// Recomposes (H, P, L) with P on the 0-100 scale into gamma-encoded sRGB.
pub fn hpluv_to_rgb(hpl: [f64; 3]) -> [f64; 3] {
    let [h, p, l] = hpl;
    let c = if degenerate_l(l) {
        0.0
    } else {
        p / 100.0 * max_safe_chroma_for_l(l)
    };
    lchuv_to_rgb([l, c, h])
}
