//! RGB ↔ color space conversion layer.
//!
//! Every module exposes a `*_from_rgb` / `*_to_rgb` pair operating on
//! gamma-encoded sRGB triples in [0, 1]. The pairs are bijective on the RGB
//! unit cube up to floating-point tolerance, except at documented achromatic
//! singularities where the hue axis is undefined; those inputs resolve to a
//! defined fallback (saturation 0, hue 0) instead of propagating NaN.
//!
//! Triple ordering follows each space's native convention; in all fourteen
//! spaces the colorfulness channel lands at index 1, which the adapter table
//! records explicitly rather than assuming.
//!
//! Out-of-gamut triples (a boosted chroma the space cannot display) convert
//! back to RGB values outside [0, 1]; clamping is the caller's decision.

pub mod hct;
pub mod hsi;
pub mod hsl;
pub mod hsluv;
pub mod hsv;
pub mod jzazbz;
pub mod lab;
pub mod luv;
pub mod okhsx;
pub mod oklab;
pub mod tsl;
pub mod xyz;
