//! # vibrance-color
//!
//! Perceptual color spaces and the saturation adjustment engine.
//!
//! This crate contains everything needed to turn a (color space, gain, mask)
//! configuration into a pure per-pixel transform:
//!
//! - **Conversion layer** ([`space`]) - exact round-trip RGB↔space math for
//!   fourteen perceptually-motivated color spaces
//! - **Adapter table** ([`adapter`]) - one row per space naming its
//!   decompose/recompose pair, its chroma channel, and its normalization
//!   factor
//! - **Gain law and gamut mask** ([`gain`]) - the scalar saturation
//!   boost/reduction curve and the clipping-distance mask
//! - **Engine** ([`engine`]) - composes the above into a `Pixel -> Pixel`
//!   function
//! - **Calibrator** ([`calibrate`]) - offline exhaustive search that derives
//!   the normalization constants baked into the adapter table
//!
//! # Color Spaces
//!
//! | Name | Chroma channel | Normalization |
//! |------|----------------|---------------|
//! | HSB / HSV | S | bounded [0, 1] |
//! | HSL | S | bounded [0, 1] |
//! | HSI | S | bounded [0, 1] |
//! | LCHab | C | calibrated |
//! | LCHuv | C | calibrated |
//! | HSLuv | S (fraction) | bounded [0, 1] |
//! | HPLuv | P | calibrated |
//! | TSL | S | bounded [0, 1] |
//! | JzCzHz | Cz | calibrated |
//! | Oklch | C | calibrated |
//! | Okhsv | S | bounded [0, 1] |
//! | Okhsl | S | bounded [0, 1] |
//! | Oklrch | C | bounded (raw chroma) |
//! | HCT | C | calibrated |
//!
//! # Quick Start
//!
//! ```rust
//! use vibrance_color::{ColorSpace, GainConfig, SaturationEngine};
//!
//! let config = GainConfig::new(ColorSpace::Oklch, 0.4, true).unwrap();
//! let engine = SaturationEngine::build(config);
//!
//! let vivid = engine.apply([0.6, 0.3, 0.2]);
//! assert!(vivid[0] > 0.6); // red channel pushed outward
//! ```
//!
//! # Used By
//!
//! - `vibrance-ops` - applies the engine across image rows
//! - `vibrance-cli` - builds engines from command-line flags

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;

pub mod adapter;
pub mod calibrate;
pub mod engine;
pub mod gain;
pub mod space;
pub mod srgb;

pub use adapter::{Adapter, ColorSpace};
pub use calibrate::{CalibrationResult, calibrate, calibrate_with_step};
pub use engine::{GainConfig, SaturationEngine, build_engine};
pub use error::{ColorError, ColorResult};
pub use gain::{gain, gamut_mask};
