//! # vibrance-io
//!
//! Image I/O for the saturation pipeline.
//!
//! Decoding goes through the `image` crate into the shared
//! [`vibrance_core::PixelBuffer`] (f32 RGBA), remembering whether the
//! source carried alpha and 16-bit depth so a matching output encoding can
//! be picked. Encoding is a fixed table of named save formats - the same
//! closed-enum-table shape as the color-space registry - each mapping to a
//! concrete codec configuration.
//!
//! # Example
//!
//! ```rust,ignore
//! use vibrance_io::{read, SaveFormat, output_path};
//!
//! let loaded = read("input.png")?;
//! let format = SaveFormat::default_for(loaded.has_alpha, loaded.sixteen_bit);
//! let out = output_path("input.png".as_ref(), format.extension())?;
//! format.save(&out, &loaded.buffer)?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod read;
mod save;

pub use error::{IoError, IoResult};
pub use read::{LoadedImage, read};
pub use save::{SaveFormat, output_path};
