//! Okhsv and Okhsl.
//!
//! Björn Ottosson's hue/saturation/value and hue/saturation/lightness
//! remappings of Oklab, shaped against the sRGB gamut so the nominal channel
//! ranges are [0, 1]. Hue is a turn fraction in [0, 1), matching the
//! reference implementation, not degrees.
//!
//! The cusp search and the gamut-intersection Halley steps follow the
//! reference implementation; saturation can overshoot 1.0 by roughly 1%
//! near the cusp because the polynomial fit is approximate.
//!
//! Achromatic inputs have no defined hue direction and decompose to
//! (0, 0, lightness) instead of dividing by zero chroma.

use std::f64::consts::PI;

use super::oklab::{linear_from_oklab, oklab_from_linear, toe, toe_inv};
use crate::srgb;

/// Lightness/chroma pair at the gamut cusp.
#[derive(Debug, Clone, Copy)]
struct Lc {
    l: f64,
    c: f64,
}

/// Cusp encoded as S = C/L and T = C/(1-L).
#[derive(Debug, Clone, Copy)]
struct St {
    s: f64,
    t: f64,
}

const ACHROMATIC_EPS: f64 = 1e-12;

/// Maximum saturation (S = C/L) for a unit hue direction (a, b).
fn compute_max_saturation(a: f64, b: f64) -> f64 {
    // Select coefficients for whichever RGB component hits zero first
    let (k0, k1, k2, k3, k4, wl, wm, ws) = if -1.88170328 * a - 0.80936493 * b > 1.0 {
        // Red component
        (
            1.19086277,
            1.76576728,
            0.59662641,
            0.75515197,
            0.56771245,
            4.0767416621,
            -3.3077115913,
            0.2309699292,
        )
    } else if 1.81444104 * a - 1.19445276 * b > 1.0 {
        // Green component
        (
            0.73956515,
            -0.45954404,
            0.08285427,
            0.12541070,
            0.14503204,
            -1.2684380046,
            2.6097574011,
            -0.3413193965,
        )
    } else {
        // Blue component
        (
            1.35733652,
            -0.00915799,
            -1.15130210,
            -0.50559606,
            0.00692167,
            -0.0041960863,
            -0.7034186147,
            1.7076147010,
        )
    };

    // Polynomial approximation, then one Halley step
    let mut s = k0 + k1 * a + k2 * b + k3 * a * a + k4 * a * b;

    let k_l = 0.3963377774 * a + 0.2158037573 * b;
    let k_m = -0.1055613458 * a - 0.0638541728 * b;
    let k_s = -0.0894841775 * a - 1.2914855480 * b;

    let l_ = 1.0 + s * k_l;
    let m_ = 1.0 + s * k_m;
    let s_ = 1.0 + s * k_s;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    let l_ds = 3.0 * k_l * l_ * l_;
    let m_ds = 3.0 * k_m * m_ * m_;
    let s_ds = 3.0 * k_s * s_ * s_;

    let l_ds2 = 6.0 * k_l * k_l * l_;
    let m_ds2 = 6.0 * k_m * k_m * m_;
    let s_ds2 = 6.0 * k_s * k_s * s_;

    let f = wl * l + wm * m + ws * s3;
    let f1 = wl * l_ds + wm * m_ds + ws * s_ds;
    let f2 = wl * l_ds2 + wm * m_ds2 + ws * s_ds2;

    s -= f * f1 / (f1 * f1 - 0.5 * f * f2);
    s
}

/// Cusp of the gamut triangle for a unit hue direction.
fn find_cusp(a: f64, b: f64) -> Lc {
    let s_cusp = compute_max_saturation(a, b);

    let rgb_at_max = linear_from_oklab([1.0, s_cusp * a, s_cusp * b]);
    let l_cusp = (1.0 / rgb_at_max[0].max(rgb_at_max[1]).max(rgb_at_max[2])).cbrt();
    Lc {
        l: l_cusp,
        c: l_cusp * s_cusp,
    }
}

/// Intersection of the line L = L0·(1-t) + t·L1, C = t·C1 with the gamut.
fn find_gamut_intersection(a: f64, b: f64, l1: f64, c1: f64, l0: f64, cusp: Lc) -> f64 {
    if (l1 - l0) * cusp.c - (cusp.l - l0) * c1 <= 0.0 {
        // Lower half
        return cusp.c * l0 / (c1 * cusp.l + cusp.c * (l0 - l1));
    }

    // Upper half: triangle intersection, then one Halley step per channel
    let mut t = cusp.c * (l0 - 1.0) / (c1 * (cusp.l - 1.0) + cusp.c * (l0 - l1));

    let dl = l1 - l0;
    let dc = c1;

    let k_l = 0.3963377774 * a + 0.2158037573 * b;
    let k_m = -0.1055613458 * a - 0.0638541728 * b;
    let k_s = -0.0894841775 * a - 1.2914855480 * b;

    let l_dt = dl + dc * k_l;
    let m_dt = dl + dc * k_m;
    let s_dt = dl + dc * k_s;

    let l = l0 * (1.0 - t) + t * l1;
    let c = t * c1;

    let l_ = l + c * k_l;
    let m_ = l + c * k_m;
    let s_ = l + c * k_s;

    let l3 = l_ * l_ * l_;
    let m3 = m_ * m_ * m_;
    let s3 = s_ * s_ * s_;

    let ldt = 3.0 * l_dt * l_ * l_;
    let mdt = 3.0 * m_dt * m_ * m_;
    let sdt = 3.0 * s_dt * s_ * s_;

    let ldt2 = 6.0 * l_dt * l_dt * l_;
    let mdt2 = 6.0 * m_dt * m_dt * m_;
    let sdt2 = 6.0 * s_dt * s_dt * s_;

    let r = 4.0767416621 * l3 - 3.3077115913 * m3 + 0.2309699292 * s3 - 1.0;
    let r1 = 4.0767416621 * ldt - 3.3077115913 * mdt + 0.2309699292 * sdt;
    let r2 = 4.0767416621 * ldt2 - 3.3077115913 * mdt2 + 0.2309699292 * sdt2;

    let u_r = r1 / (r1 * r1 - 0.5 * r * r2);
    let t_r = -r * u_r;

    let g = -1.2684380046 * l3 + 2.6097574011 * m3 - 0.3413193965 * s3 - 1.0;
    let g1 = -1.2684380046 * ldt + 2.6097574011 * mdt - 0.3413193965 * sdt;
    let g2 = -1.2684380046 * ldt2 + 2.6097574011 * mdt2 - 0.3413193965 * sdt2;

    let u_g = g1 / (g1 * g1 - 0.5 * g * g2);
    let t_g = -g * u_g;

    let bb = -0.0041960863 * l3 - 0.7034186147 * m3 + 1.7076147010 * s3 - 1.0;
    let b1 = -0.0041960863 * ldt - 0.7034186147 * mdt + 1.7076147010 * sdt;
    let b2 = -0.0041960863 * ldt2 - 0.7034186147 * mdt2 + 1.7076147010 * sdt2;

    let u_b = b1 / (b1 * b1 - 0.5 * bb * b2);
    let t_b = -bb * u_b;

    let t_r = if u_r >= 0.0 { t_r } else { f64::MAX };
    let t_g = if u_g >= 0.0 { t_g } else { f64::MAX };
    let t_b = if u_b >= 0.0 { t_b } else { f64::MAX };

    t + t_r.min(t_g).min(t_b)
}

fn to_st(cusp: Lc) -> St {
    St {
        s: cusp.c / cusp.l,
        t: cusp.c / (1.0 - cusp.l),
    }
}

/// Polynomial fit of the mid-chroma shape; designed so S_mid < S_max.
fn get_st_mid(a_: f64, b_: f64) -> St {
    let s = 0.11516993
        + 1.0
            / (7.44778970
                + 4.15901240 * b_
                + a_ * (-2.19557347
                    + 1.75198401 * b_
                    + a_ * (-2.13704948 - 10.02301043 * b_
                        + a_ * (-4.24894561 + 5.38770819 * b_ + 4.69891013 * a_))));

    let t = 0.11239642
        + 1.0
            / (1.61320320 - 0.68124379 * b_
                + a_ * (0.40370612
                    + 0.90148123 * b_
                    + a_ * (-0.27087943
                        + 0.61223990 * b_
                        + a_ * (0.00299215 - 0.45399568 * b_ - 0.14661872 * a_))));

    St { s, t }
}

/// Chroma landmarks (C_0, C_mid, C_max) for a lightness and hue direction.
fn get_cs(l: f64, a_: f64, b_: f64) -> (f64, f64, f64) {
    let cusp = find_cusp(a_, b_);

    let c_max = find_gamut_intersection(a_, b_, l, 1.0, l, cusp);
    let st_max = to_st(cusp);

    // Compensates for the curved part of the gamut shape
    let k = c_max / (l * st_max.s).min((1.0 - l) * st_max.t);

    let c_mid = {
        let st_mid = get_st_mid(a_, b_);
        let c_a = l * st_mid.s;
        let c_b = (1.0 - l) * st_mid.t;
        // Soft minimum instead of the sharp triangle shape
        0.9 * k * (1.0 / (1.0 / (c_a * c_a * c_a * c_a) + 1.0 / (c_b * c_b * c_b * c_b))).sqrt().sqrt()
    };

    let c_0 = {
        // Hue-independent; ST picked as rough average values
        let c_a = l * 0.4;
        let c_b = (1.0 - l) * 0.8;
        (1.0 / (1.0 / (c_a * c_a) + 1.0 / (c_b * c_b))).sqrt()
    };

    (c_0, c_mid, c_max)
}

/// Decomposes gamma-encoded sRGB into (H, S, V), hue as a turn fraction.
pub fn okhsv_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let lab = oklab_from_linear(srgb::eotf_rgb(rgb));

    let c = lab[1].hypot(lab[2]);
    let mut l = lab[0];
    if c < ACHROMATIC_EPS {
        return [0.0, 0.0, toe(l)];
    }
    let a_ = lab[1] / c;
    let b_ = lab[2] / c;
    let h = 0.5 + 0.5 * (-lab[2]).atan2(-lab[1]) / PI;

    let cusp = find_cusp(a_, b_);
    let st_max = to_st(cusp);
    let s_0 = 0.5;
    let k = 1.0 - s_0 / st_max.s;

    // L_v, C_v as if the gamut were a perfect triangle
    let t = st_max.t / (c + l * st_max.t);
    let l_v = t * l;
    let c_v = t * c;

    let l_vt = toe_inv(l_v);
    let c_vt = c_v * l_vt / l_v;

    // Invert the toe / curved-top compensation
    let rgb_scale = linear_from_oklab([l_vt, a_ * c_vt, b_ * c_vt]);
    let scale_l = (1.0 / rgb_scale[0].max(rgb_scale[1]).max(rgb_scale[2]).max(0.0)).cbrt();

    l /= scale_l;
    l = toe(l);

    let v = l / l_v;
    let s = (s_0 + st_max.t) * c_v / ((st_max.t * s_0) + st_max.t * k * c_v);

    [h, s, v]
}

/// Recomposes (H, S, V), hue as a turn fraction, into gamma-encoded sRGB.
pub fn okhsv_to_rgb(hsv: [f64; 3]) -> [f64; 3] {
    let [h, s, v] = hsv;
    if v <= 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let a_ = (2.0 * PI * h).cos();
    let b_ = (2.0 * PI * h).sin();

    let cusp = find_cusp(a_, b_);
    let st_max = to_st(cusp);
    let s_0 = 0.5;
    let k = 1.0 - s_0 / st_max.s;

    // L, C as if the gamut were a perfect triangle
    let l_v = 1.0 - s * s_0 / (s_0 + st_max.t - st_max.t * k * s);
    let c_v = s * st_max.t * s_0 / (s_0 + st_max.t - st_max.t * k * s);

    let mut l = v * l_v;
    let mut c = v * c_v;

    // Compensate for both the toe and the curved top of the triangle
    let l_vt = toe_inv(l_v);
    let c_vt = c_v * l_vt / l_v;

    let l_new = toe_inv(l);
    c *= l_new / l;
    l = l_new;

    let rgb_scale = linear_from_oklab([l_vt, a_ * c_vt, b_ * c_vt]);
    let scale_l = (1.0 / rgb_scale[0].max(rgb_scale[1]).max(rgb_scale[2]).max(0.0)).cbrt();

    l *= scale_l;
    c *= scale_l;

    srgb::oetf_rgb(linear_from_oklab([l, c * a_, c * b_]))
}

/// Decomposes gamma-encoded sRGB into (H, S, L), hue as a turn fraction.
pub fn okhsl_from_rgb(rgb: [f64; 3]) -> [f64; 3] {
    let lab = oklab_from_linear(srgb::eotf_rgb(rgb));

    let c = lab[1].hypot(lab[2]);
    let l = lab[0];
    if c < ACHROMATIC_EPS {
        return [0.0, 0.0, toe(l)];
    }
    let a_ = lab[1] / c;
    let b_ = lab[2] / c;
    let h = 0.5 + 0.5 * (-lab[2]).atan2(-lab[1]) / PI;

    let (c_0, c_mid, c_max) = get_cs(l, a_, b_);

    let mid = 0.8;
    let mid_inv = 1.25;

    let s = if c < c_mid {
        let k_1 = mid * c_0;
        let k_2 = 1.0 - k_1 / c_mid;
        let t = c / (k_1 + k_2 * c);
        t * mid
    } else {
        let k_0 = c_mid;
        let k_1 = (1.0 - mid) * c_mid * c_mid * mid_inv * mid_inv / c_0;
        let k_2 = 1.0 - k_1 / (c_max - c_mid);
        let t = (c - k_0) / (k_1 + k_2 * (c - k_0));
        mid + (1.0 - mid) * t
    };

    [h, s, toe(l)]
}

/// Recomposes (H, S, L), hue as a turn fraction, into gamma-encoded sRGB.
pub fn okhsl_to_rgb(hsl: [f64; 3]) -> [f64; 3] {
    let [h, s, l] = hsl;
    if l >= 1.0 {
        return [1.0, 1.0, 1.0];
    }
    if l <= 0.0 {
        return [0.0, 0.0, 0.0];
    }

    let a_ = (2.0 * PI * h).cos();
    let b_ = (2.0 * PI * h).sin();
    let l_ok = toe_inv(l);

    let (c_0, c_mid, c_max) = get_cs(l_ok, a_, b_);

    let mid = 0.8;
    let mid_inv = 1.25;

    let c = if s < mid {
        let t = mid_inv * s;
        let k_1 = mid * c_0;
        let k_2 = 1.0 - k_1 / c_mid;
        t * k_1 / (1.0 - k_2 * t)
    } else {
        let t = (s - mid) / (1.0 - mid);
        let k_0 = c_mid;
        let k_1 = (1.0 - mid) * c_mid * c_mid * mid_inv * mid_inv / c_0;
        let k_2 = 1.0 - k_1 / (c_max - c_mid);
        k_0 + t * k_1 / (1.0 - k_2 * t)
    };

    srgb::oetf_rgb(linear_from_oklab([l_ok, c * a_, c * b_]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_achromatic_guard() {
        let [h, s, v] = okhsv_from_rgb([0.5, 0.5, 0.5]);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!(v > 0.0 && v < 1.0);

        let [h, s, _] = okhsl_from_rgb([0.25, 0.25, 0.25]);
        assert_eq!((h, s), (0.0, 0.0));
    }

    #[test]
    fn test_black_and_white_endpoints() {
        assert_eq!(okhsv_to_rgb([0.3, 0.5, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(okhsl_to_rgb([0.3, 0.5, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(okhsl_to_rgb([0.3, 0.5, 1.0]), [1.0, 1.0, 1.0]);

        let [_, s, l] = okhsl_from_rgb([1.0, 1.0, 1.0]);
        assert_eq!(s, 0.0);
        assert_abs_diff_eq!(l, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_primaries_near_full_saturation() {
        for rgb in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] {
            let [_, s, _] = okhsv_from_rgb(rgb);
            assert_abs_diff_eq!(s, 1.0, epsilon = 0.02);
            let [_, s, _] = okhsl_from_rgb(rgb);
            assert_abs_diff_eq!(s, 1.0, epsilon = 0.02);
        }
    }

    #[test]
    fn test_okhsv_roundtrip() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0];
                    let back = okhsv_to_rgb(okhsv_from_rgb(rgb));
                    for i in 0..3 {
                        assert_abs_diff_eq!(rgb[i], back[i], epsilon = 1e-6);
                    }
                }
            }
        }
    }

    #[test]
    fn test_okhsl_roundtrip() {
        for r in 0..=4 {
            for g in 0..=4 {
                for b in 0..=4 {
                    let rgb = [r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0];
                    let back = okhsl_to_rgb(okhsl_from_rgb(rgb));
                    for i in 0..3 {
                        assert_abs_diff_eq!(rgb[i], back[i], epsilon = 1e-6);
                    }
                }
            }
        }
    }
}
