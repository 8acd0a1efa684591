//! The saturation engine: configuration in, pixel transform out.
//!
//! An engine is an immutable value built once per configuration change and
//! shared freely across threads; it holds nothing but a table reference and
//! two scalars. The gain = 0 case is an explicit identity so callers can
//! skip per-pixel work entirely.

use crate::adapter::{Adapter, ColorSpace};
use crate::error::{ColorError, ColorResult};
use crate::gain::{gain, gamut_mask};

/// Validated saturation configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GainConfig {
    /// Color space whose chroma channel receives the gain.
    pub space: ColorSpace,
    /// Gain in [-1, 1]; 0 is a no-op, 1 full boost, -1 full desaturation.
    pub gain: f64,
    /// Taper the gain near clipping boundaries.
    pub use_mask: bool,
}

impl GainConfig {
    /// Creates a configuration, validating the gain range.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::GainOutOfRange`] for NaN or out-of-range gain.
    pub fn new(space: ColorSpace, gain: f64, use_mask: bool) -> ColorResult<Self> {
        if !(-1.0..=1.0).contains(&gain) {
            return Err(ColorError::GainOutOfRange(gain));
        }
        Ok(Self {
            space,
            gain,
            use_mask,
        })
    }
}

/// Immutable per-pixel saturation transform.
///
/// # Example
///
/// ```rust
/// use vibrance_color::{ColorSpace, GainConfig, SaturationEngine};
///
/// let config = GainConfig::new(ColorSpace::Hsv, -1.0, false).unwrap();
/// let engine = SaturationEngine::build(config);
///
/// // Full desaturation turns everything gray
/// let [r, g, b] = engine.apply([0.8, 0.2, 0.4]);
/// assert!((r - g).abs() < 1e-9 && (g - b).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SaturationEngine {
    transform: Transform,
}

#[derive(Debug, Clone, Copy)]
enum Transform {
    Identity,
    Saturate {
        adapter: &'static Adapter,
        gain: f64,
        use_mask: bool,
    },
}

impl SaturationEngine {
    /// Builds the transform for a configuration.
    ///
    /// A zero gain produces the identity engine; callers should check
    /// [`is_identity`](Self::is_identity) and skip the pipeline altogether,
    /// since applying it pixel by pixel is pure overhead.
    pub fn build(config: GainConfig) -> Self {
        let transform = if config.gain == 0.0 {
            Transform::Identity
        } else {
            Transform::Saturate {
                adapter: config.space.adapter(),
                gain: config.gain,
                use_mask: config.use_mask,
            }
        };
        Self { transform }
    }

    /// Returns `true` when this engine cannot change any pixel.
    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self.transform, Transform::Identity)
    }

    /// Transforms one RGB triple (gamma-encoded sRGB in [0, 1]).
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        let Transform::Saturate {
            adapter,
            gain: configured,
            use_mask,
        } = self.transform
        else {
            return rgb;
        };

        // Mask is computed from the input RGB, per pixel, before decompose
        let effective = if use_mask {
            gamut_mask(rgb[0], rgb[1], rgb[2]) * configured
        } else {
            configured
        };

        let mut comps = (adapter.decompose)(rgb);
        let raw = comps[adapter.chroma_index];
        if !raw.is_finite() {
            return rgb;
        }
        comps[adapter.chroma_index] = gain(raw / adapter.norm_factor, effective) * adapter.norm_factor;

        let out = (adapter.recompose)(comps);
        if out.iter().any(|v| !v.is_finite()) {
            return rgb;
        }
        out
    }

    /// Transforms one interleaved RGBA pixel; alpha passes through untouched.
    #[inline]
    pub fn apply_pixel(&self, px: [f32; 4]) -> [f32; 4] {
        let [r, g, b] = self.apply([px[0] as f64, px[1] as f64, px[2] as f64]);
        [r as f32, g as f32, b as f32, px[3]]
    }
}

/// Builds an engine straight from a color-space name.
///
/// Convenience for callers holding the user's selection as a string.
///
/// # Errors
///
/// Returns [`ColorError::UnknownColorSpace`] for unregistered names and
/// [`ColorError::GainOutOfRange`] for invalid gain.
pub fn build_engine(space_name: &str, gain: f64, use_mask: bool) -> ColorResult<SaturationEngine> {
    let space = ColorSpace::parse(space_name)?;
    Ok(SaturationEngine::build(GainConfig::new(space, gain, use_mask)?))
}
