//! HCT - hue, chroma, tone.
//!
//! Combines CAM16 hue and chroma (under the standard sRGB viewing
//! conditions) with CIELAB L* as the tone axis. The forward direction is
//! plain CAM16; the reverse solves for the CAM16 lightness J whose relative
//! luminance matches the requested tone, then runs the CAM16 inverse with
//! the requested chroma and hue. Y is strictly increasing in J for fixed
//! chroma and hue, so a bisection converges to well below the round-trip
//! tolerance.
//!
//! # Range (sRGB gamut)
//!
//! - H: [0, 360) degrees
//! - C: [0, ~113] - empirical maximum, see the adapter table
//! - T: [0, 100]

use std::f64::consts::PI;
use std::sync::LazyLock;

use super::xyz::{self, invert, mul};
use crate::srgb;

const M16: [[f64; 3]; 3] = [
    [0.401288, 0.650173, -0.051461],
    [-0.250268, 1.204414, 0.045854],
    [-0.002079, 0.048952, 0.953127],
];

static M16_INV: LazyLock<[[f64; 3]; 3]> = LazyLock::new(|| invert(&M16));

/// CIE L* to relative luminance Y in [0, 100].
fn y_from_lstar(lstar: f64) -> f64 {
    const KAPPA: f64 = 24389.0 / 27.0;
    let ft = (lstar + 16.0) / 116.0;
    let ft3 = ft * ft * ft;
    if ft3 > 216.0 / 24389.0 {
        100.0 * ft3
    } else {
        100.0 * lstar / KAPPA
    }
}

/// Relative luminance Y in [0, 100] to CIE L*.
fn lstar_from_y(y: f64) -> f64 {
    const EPSILON: f64 = 216.0 / 24389.0;
    const KAPPA: f64 = 24389.0 / 27.0;
    let yr = y / 100.0;
    if yr > EPSILON {
        116.0 * yr.cbrt() - 16.0
    } else {
        KAPPA * yr
    }
}

/// Precomputed CAM16 viewing-condition terms.
struct ViewingConditions {
    n: f64,
    aw: f64,
    nbb: f64,
    ncb: f64,
    c: f64,
    nc: f64,
    fl: f64,
    z: f64,
    rgb_d: [f64; 3],
}

/// Standard conditions: D65 white, average surround, L* 50 background,
/// adapting luminance from an 11.72 cd/m² default environment.
static VC: LazyLock<ViewingConditions> = LazyLock::new(|| {
    let white = [95.047, 100.0, 108.883];
    let adapting_luminance = 200.0 / PI * y_from_lstar(50.0) / 100.0;
    let background_lstar = 50.0;
    let surround_f = 1.0;
    let c = 0.69;
    let nc = 1.0;

    let rw = mul(&M16, white);
    let d = (surround_f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp()))
        .clamp(0.0, 1.0);
    let rgb_d = [
        d * (100.0 / rw[0]) + 1.0 - d,
        d * (100.0 / rw[1]) + 1.0 - d,
        d * (100.0 / rw[2]) + 1.0 - d,
    ];

    let k = 1.0 / (5.0 * adapting_luminance + 1.0);
    let k4 = k * k * k * k;
    let fl = k4 * adapting_luminance
        + 0.1 * (1.0 - k4) * (1.0 - k4) * (5.0 * adapting_luminance).cbrt();

    let n = y_from_lstar(background_lstar) / white[1];
    let z = 1.48 + n.sqrt();
    let nbb = 0.725 / n.powf(0.2);
    let ncb = nbb;

    let rgb_a = [
        adapt(fl, rgb_d[0] * rw[0]),
        adapt(fl, rgb_d[1] * rw[1]),
        adapt(fl, rgb_d[2] * rw[2]),
    ];
    let aw = (2.0 * rgb_a[0] + rgb_a[1] + 0.05 * rgb_a[2]) * nbb;

    ViewingConditions {
        n,
        aw,
        nbb,
        ncb,
        c,
        nc,
        fl,
        z,
        rgb_d,
    }
});

/// Post-adaptation cone compression.
#[inline]
fn adapt(fl: f64, component: f64) -> f64 {
    let af = (fl * component.abs() / 100.0).powf(0.42);
    component.signum() * 400.0 * af / (af + 27.13)
}

/// Inverse of [`adapt`].
#[inline]
fn unadapt(fl: f64, adapted: f64) -> f64 {
    let base = (27.13 * adapted.abs() / (400.0 - adapted.abs())).max(0.0);
    adapted.signum() * (100.0 / fl) * base.powf(1.0 / 0.42)
}

/// CAM16 hue (degrees) and chroma for an XYZ with Y in [0, 100].
fn cam16_from_xyz(xyz: [f64; 3]) -> (f64, f64) {
    let vc = &*VC;
    let rgb_t = mul(&M16, xyz);
    let r_a = adapt(vc.fl, vc.rgb_d[0] * rgb_t[0]);
    let g_a = adapt(vc.fl, vc.rgb_d[1] * rgb_t[1]);
    let b_a = adapt(vc.fl, vc.rgb_d[2] * rgb_t[2]);

    let a = (11.0 * r_a - 12.0 * g_a + b_a) / 11.0;
    let b = (r_a + g_a - 2.0 * b_a) / 9.0;
    let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
    let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

    let mut hue = b.atan2(a).to_degrees();
    if hue < 0.0 {
        hue += 360.0;
    }

    let ac = p2 * vc.nbb;
    let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);

    let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
    let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
    let p1 = 50000.0 / 13.0 * e_hue * vc.nc * vc.ncb;
    let t = p1 * a.hypot(b) / (u + 0.305);
    let alpha = t.powf(0.9) * (1.64 - 0.29_f64.powf(vc.n)).powf(0.73);
    let chroma = alpha * (j / 100.0).sqrt();
    (hue, chroma)
}

/// CAM16 inverse: XYZ (Y in [0, 100]) from lightness J, chroma and hue.
fn xyz_from_cam16(j: f64, chroma: f64, hue: f64) -> [f64; 3] {
    let vc = &*VC;
    if j <= 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let alpha = if chroma == 0.0 {
        0.0
    } else {
        chroma / (j / 100.0).sqrt()
    };
    let t = (alpha / (1.64 - 0.29_f64.powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);

    let h_rad = hue.to_radians();
    let e_hue = 0.25 * ((h_rad + 2.0).cos() + 3.8);
    let ac = vc.aw * (j / 100.0).powf(1.0 / (vc.c * vc.z));
    let p1 = e_hue * (50000.0 / 13.0) * vc.nc * vc.ncb;
    let p2 = ac / vc.nbb;

    let (h_sin, h_cos) = h_rad.sin_cos();
    let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
    let a = gamma * h_cos;
    let b = gamma * h_sin;

    let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
    let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
    let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

    let rgb_t = [
        unadapt(vc.fl, r_a) / vc.rgb_d[0],
        unadapt(vc.fl, g_a) / vc.rgb_d[1],
        unadapt(vc.fl, b_a) / vc.rgb_d[2],
    ];
    mul(&M16_INV, rgb_t)
}

/// Decomposes gamma-encoded sRGB into (H, C, T).
pub fn hct_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let rel = xyz::xyz_from_linear(srgb::eotf_rgb(rgb));
    let abs = [rel[0] * 100.0, rel[1] * 100.0, rel[2] * 100.0];
    let (hue, chroma) = cam16_from_xyz(abs);
    [hue, chroma, lstar_from_y(abs[1])]
}

/// Recomposes (H, C, T) into gamma-encoded sRGB.
///
/// Chroma values the hue/tone combination cannot display come back as
/// out-of-range linear RGB, the same as the other unclamped spaces.
pub fn hct_to_rgb(hct: [f64; 3]) -> [f64; 3] {
    let [hue, chroma, tone] = hct;
    if tone <= 0.0 {
        return [0.0, 0.0, 0.0];
    }
    let y_target = y_from_lstar(tone.min(100.0));

    // Y(j) is monotonic; widen the bracket first, then bisect
    let mut lo = 0.0;
    let mut hi = 100.0;
    while xyz_from_cam16(hi, chroma, hue)[1] < y_target && hi < 1600.0 {
        hi *= 2.0;
    }
    let mut xyz = [0.0, y_target, 0.0];
    for _ in 0..60 {
        let j = 0.5 * (lo + hi);
        xyz = xyz_from_cam16(j, chroma, hue);
        if xyz[1] < y_target {
            lo = j;
        } else {
            hi = j;
        }
    }

    let rel = [xyz[0] / 100.0, xyz[1] / 100.0, xyz[2] / 100.0];
    srgb::oetf_rgb(xyz::linear_from_xyz(rel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_tone_is_lstar() {
        let [_, _, t] = hct_from_rgb([1.0, 1.0, 1.0]);
        assert_abs_diff_eq!(t, 100.0, epsilon = 0.05);
        let [_, c, t] = hct_from_rgb([0.0, 0.0, 0.0]);
        assert_abs_diff_eq!(t, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(c, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_red_reference_values() {
        // Material reference: red is roughly H 27, C 113, T 53
        let [h, c, t] = hct_from_rgb([1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(h, 27.4, epsilon = 1.0);
        assert_abs_diff_eq!(c, 113.4, epsilon = 1.0);
        assert_abs_diff_eq!(t, 53.2, epsilon = 0.5);
    }

    #[test]
    fn test_blue_reference_values() {
        let [h, c, t] = hct_from_rgb([0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(h, 282.8, epsilon = 1.5);
        assert_abs_diff_eq!(c, 87.2, epsilon = 1.5);
        assert_abs_diff_eq!(t, 32.3, epsilon = 0.5);
    }

    #[test]
    fn test_roundtrip() {
        for r in 0..=3 {
            for g in 0..=3 {
                for b in 0..=3 {
                    let rgb = [r as f64 / 3.0, g as f64 / 3.0, b as f64 / 3.0];
                    let back = hct_to_rgb(hct_from_rgb(rgb));
                    for i in 0..3 {
                        assert_abs_diff_eq!(rgb[i], back[i], epsilon = 1e-5);
                    }
                }
            }
        }
    }
}
