//! # vibrance-ops
//!
//! The pixel pipeline: applies a [`vibrance_color::SaturationEngine`] across
//! a [`vibrance_core::PixelBuffer`] in place, row-parallel and
//! cancellation-aware.
//!
//! # Example
//!
//! ```rust
//! use vibrance_core::{CancelToken, PixelBuffer};
//! use vibrance_color::{ColorSpace, GainConfig, SaturationEngine};
//! use vibrance_ops::pipeline;
//!
//! let mut img = PixelBuffer::filled(64, 64, [0.6, 0.3, 0.2, 1.0]);
//! let engine = SaturationEngine::build(
//!     GainConfig::new(ColorSpace::Oklch, 0.5, true).unwrap(),
//! );
//! pipeline::apply(&mut img, &engine, &CancelToken::new()).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod pipeline;

pub use error::{OpsError, OpsResult};
