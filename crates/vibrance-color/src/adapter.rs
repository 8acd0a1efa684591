//! Color-space adapter table.
//!
//! One row per registered color space: the decompose/recompose pair, which
//! channel carries colorfulness, and the factor that normalizes that channel
//! to [0, 1]. The registered set is closed, so the table is a plain static
//! array indexed by the [`ColorSpace`] discriminant and the compiler checks
//! exhaustiveness wherever a space is matched.
//!
//! Table order is part of the observable contract: [`ColorSpace::ALL`] and
//! [`ColorSpace::names`] always yield the registration order shown below,
//! which UI selectors and the CLI listings rely on.
//!
//! # Normalization
//!
//! Spaces whose chroma channel is bounded by construction use a factor of
//! 1.0. The others have an in-gamut maximum that exists only empirically;
//! those factors were produced by the `calibrate` subcommand's exhaustive
//! search over the 8-bit RGB cube and must be regenerated whenever a
//! conversion definition changes or a space is added.

use crate::error::{ColorError, ColorResult};
use crate::space::{hct, hsi, hsl, hsluv, hsv, jzazbz, lab, luv, okhsx, oklab, tsl};

/// Largest in-gamut LCHab chroma over the 8-bit sRGB cube.
pub const LCHAB_MAX_CHROMA: f64 = 133.80761432012983;
/// Largest in-gamut LCHuv chroma over the 8-bit sRGB cube.
pub const LCHUV_MAX_CHROMA: f64 = 179.04142708939614;
/// Largest in-gamut HPLuv saturation over the 8-bit sRGB cube.
pub const HPLUV_MAX_SATURATION: f64 = 1784.328864093446;
/// Largest in-gamut JzCzHz chroma over the 8-bit sRGB cube.
pub const JZCZHZ_MAX_CHROMA: f64 = 0.19027906590136512;
/// Largest in-gamut Oklch chroma over the 8-bit sRGB cube.
pub const OKLCH_MAX_CHROMA: f64 = 0.32249096477516476;
/// Largest in-gamut HCT chroma over the 8-bit sRGB cube.
pub const HCT_MAX_CHROMA: f64 = 113.35620829574427;

/// The closed set of registered color spaces, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    /// HSB / HSV hexcone.
    Hsv,
    /// HSL bi-hexcone.
    Hsl,
    /// Hue, saturation, intensity.
    Hsi,
    /// CIELAB cylindrical.
    Lchab,
    /// CIELUV cylindrical.
    Lchuv,
    /// HSLuv (saturation as a fraction).
    Hsluv,
    /// HPLuv (pastel saturation, 0-100 scale).
    Hpluv,
    /// Tint, saturation, lightness.
    Tsl,
    /// Jzazbz cylindrical.
    Jzczhz,
    /// Oklab cylindrical.
    Oklch,
    /// Okhsv.
    Okhsv,
    /// Okhsl.
    Okhsl,
    /// Oklab cylindrical with the Lr lightness toe.
    Oklrch,
    /// Hue, chroma, tone (CAM16 + L*).
    Hct,
}

/// One row of the strategy table.
///
/// `decompose` and `recompose` are inverses on the RGB unit cube up to
/// floating-point tolerance; `components[chroma_index] / norm_factor` lies
/// in [0, 1] for every in-gamut input (up to the documented ~1% overshoot
/// of the Okhsv/Okhsl fits).
#[derive(Debug, Clone, Copy)]
pub struct Adapter {
    /// Which space this row belongs to.
    pub space: ColorSpace,
    /// Display name, also accepted by [`ColorSpace::parse`].
    pub name: &'static str,
    /// RGB to native components.
    pub decompose: fn([f64; 3]) -> [f64; 3],
    /// Native components back to RGB.
    pub recompose: fn([f64; 3]) -> [f64; 3],
    /// Index of the chroma/saturation channel in the native triple.
    pub chroma_index: usize,
    /// Positive factor bounding the chroma channel to [0, 1].
    pub norm_factor: f64,
}

/// Registration-ordered adapter rows. Indexed by `ColorSpace as usize`.
static TABLE: [Adapter; 14] = [
    Adapter {
        space: ColorSpace::Hsv,
        name: "HSB / HSV",
        decompose: hsv::hsv_from_rgb,
        recompose: hsv::hsv_to_rgb,
        chroma_index: 1,
        norm_factor: 1.0,
    },
    Adapter {
        space: ColorSpace::Hsl,
        name: "HSL",
        decompose: hsl::hsl_from_rgb,
        recompose: hsl::hsl_to_rgb,
        chroma_index: 1,
        norm_factor: 1.0,
    },
    Adapter {
        space: ColorSpace::Hsi,
        name: "HSI",
        decompose: hsi::hsi_from_rgb,
        recompose: hsi::hsi_to_rgb,
        chroma_index: 1,
        norm_factor: 1.0,
    },
    Adapter {
        space: ColorSpace::Lchab,
        name: "LCHab",
        decompose: lab::lchab_from_rgb,
        recompose: lab::lchab_to_rgb,
        chroma_index: 1,
        norm_factor: LCHAB_MAX_CHROMA,
    },
    Adapter {
        space: ColorSpace::Lchuv,
        name: "LCHuv",
        decompose: luv::lchuv_from_rgb,
        recompose: luv::lchuv_to_rgb,
        chroma_index: 1,
        norm_factor: LCHUV_MAX_CHROMA,
    },
    Adapter {
        space: ColorSpace::Hsluv,
        name: "HSLuv",
        decompose: hsluv::hsluv_from_rgb,
        recompose: hsluv::hsluv_to_rgb,
        chroma_index: 1,
        norm_factor: 1.0,
    },
    Adapter {
        space: ColorSpace::Hpluv,
        name: "HPLuv",
        decompose: hsluv::hpluv_from_rgb,
        recompose: hsluv::hpluv_to_rgb,
        chroma_index: 1,
        norm_factor: HPLUV_MAX_SATURATION,
    },
    Adapter {
        space: ColorSpace::Tsl,
        name: "TSL",
        decompose: tsl::tsl_from_rgb,
        recompose: tsl::tsl_to_rgb,
        chroma_index: 1,
        norm_factor: 1.0,
    },
    Adapter {
        space: ColorSpace::Jzczhz,
        name: "JzCzHz",
        decompose: jzazbz::jzczhz_from_rgb,
        recompose: jzazbz::jzczhz_to_rgb,
        chroma_index: 1,
        norm_factor: JZCZHZ_MAX_CHROMA,
    },
    Adapter {
        space: ColorSpace::Oklch,
        name: "Oklch",
        decompose: oklab::oklch_from_rgb,
        recompose: oklab::oklch_to_rgb,
        chroma_index: 1,
        norm_factor: OKLCH_MAX_CHROMA,
    },
    Adapter {
        space: ColorSpace::Okhsv,
        name: "Okhsv",
        decompose: okhsx::okhsv_from_rgb,
        recompose: okhsx::okhsv_to_rgb,
        chroma_index: 1,
        norm_factor: 1.0,
    },
    Adapter {
        space: ColorSpace::Okhsl,
        name: "Okhsl",
        decompose: okhsx::okhsl_from_rgb,
        recompose: okhsx::okhsl_to_rgb,
        chroma_index: 1,
        norm_factor: 1.0,
    },
    Adapter {
        space: ColorSpace::Oklrch,
        name: "Oklrch",
        decompose: oklab::oklrch_from_rgb,
        recompose: oklab::oklrch_to_rgb,
        chroma_index: 1,
        norm_factor: 1.0,
    },
    Adapter {
        space: ColorSpace::Hct,
        name: "HCT",
        decompose: hct::hct_from_rgb,
        recompose: hct::hct_to_rgb,
        chroma_index: 1,
        norm_factor: HCT_MAX_CHROMA,
    },
];

impl ColorSpace {
    /// Every registered space, in registration order.
    pub const ALL: [ColorSpace; 14] = [
        ColorSpace::Hsv,
        ColorSpace::Hsl,
        ColorSpace::Hsi,
        ColorSpace::Lchab,
        ColorSpace::Lchuv,
        ColorSpace::Hsluv,
        ColorSpace::Hpluv,
        ColorSpace::Tsl,
        ColorSpace::Jzczhz,
        ColorSpace::Oklch,
        ColorSpace::Okhsv,
        ColorSpace::Okhsl,
        ColorSpace::Oklrch,
        ColorSpace::Hct,
    ];

    /// Returns this space's adapter row.
    #[inline]
    pub fn adapter(self) -> &'static Adapter {
        &TABLE[self as usize]
    }

    /// Returns the display name.
    #[inline]
    pub fn name(self) -> &'static str {
        self.adapter().name
    }

    /// Display names in registration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        TABLE.iter().map(|a| a.name)
    }

    /// Looks up a space by name, case-insensitively.
    ///
    /// Accepts the display name plus the obvious short forms ("hsb", "hsv",
    /// "jzczhz", ...).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownColorSpace`] for unregistered names.
    pub fn parse(name: &str) -> ColorResult<Self> {
        let wanted = name.trim();
        for adapter in &TABLE {
            if adapter.name.eq_ignore_ascii_case(wanted) {
                return Ok(adapter.space);
            }
        }
        match wanted.to_ascii_lowercase().as_str() {
            "hsb" | "hsv" => Ok(ColorSpace::Hsv),
            "lch" | "lchab" => Ok(ColorSpace::Lchab),
            "lchuv" => Ok(ColorSpace::Lchuv),
            "jch" | "jzazbz" => Ok(ColorSpace::Jzczhz),
            _ => Err(ColorError::UnknownColorSpace(name.to_string())),
        }
    }
}

impl std::str::FromStr for ColorSpace {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
