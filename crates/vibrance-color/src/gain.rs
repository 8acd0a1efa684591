//! The saturation gain law and the gamut-edge mask.
//!
//! Both are pure scalar functions; the engine composes them with an adapter
//! row to form the per-pixel transform.

/// Applies the saturation gain law to a normalized channel value.
///
/// - `g > 0` boosts toward vivid: `x.powf(1 - g)`. As g approaches 1 this
///   approaches a step that pushes all non-zero input toward 1.
/// - `g <= 0` reduces toward gray: `x * (1 + g)`. At g = -1 every input
///   collapses to 0, so full desaturation is exact rather than approximate.
///
/// The input is clamped to [0, 1] first; calibrated normalization can
/// overshoot by a hair and must not produce NaN or values above 1. Zero maps
/// to zero for every g, including g = 1 where a bare `powf(0.0, 0.0)`
/// would return 1 and tint achromatic pixels. The zero test uses a tiny
/// threshold rather than exact equality: cylindrical decompositions leave
/// ~1e-12 of chroma residue on the gray axis, and at g = 1 the power curve
/// is a step that would promote that residue to full chroma.
///
/// # Example
///
/// ```rust
/// use vibrance_color::gain;
///
/// assert_eq!(gain(0.25, 0.0), 0.25);  // identity
/// assert_eq!(gain(0.25, -1.0), 0.0);  // full desaturation
/// assert!(gain(0.25, 0.5) > 0.25);    // boost
/// ```
#[inline]
pub fn gain(x: f64, g: f64) -> f64 {
    const ACHROMATIC_EPS: f64 = 1e-9;
    let x = x.clamp(0.0, 1.0);
    if x <= ACHROMATIC_EPS {
        return 0.0;
    }
    if g > 0.0 { x.powf(1.0 - g) } else { x * (1.0 + g) }
}

/// Distance-to-clipping mask in [0, 1].
///
/// Each channel's distance to its nearer boundary (0 or 1) measures how much
/// room that channel has before a saturation push clips it; the pixel mask
/// is twice the minimum distance across channels. Mid-gray gets 1 (full
/// strength), any channel already at a boundary gets 0 (no adjustment).
///
/// # Example
///
/// ```rust
/// use vibrance_color::gamut_mask;
///
/// assert_eq!(gamut_mask(0.5, 0.5, 0.5), 1.0);
/// assert_eq!(gamut_mask(1.0, 0.3, 0.5), 0.0);
/// ```
#[inline]
pub fn gamut_mask(r: f64, g: f64, b: f64) -> f64 {
    let r_dist = r.min(1.0 - r);
    let g_dist = g.min(1.0 - g);
    let b_dist = b.min(1.0 - b);
    (2.0 * r_dist.min(g_dist).min(b_dist)).clamp(0.0, 1.0)
}
