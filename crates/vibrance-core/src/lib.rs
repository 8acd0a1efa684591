//! # vibrance-core
//!
//! Core types shared by the vibrance crates:
//!
//! - [`PixelBuffer`] - interleaved f32 RGBA image buffer
//! - [`CancelToken`] - pollable cooperative cancellation signal
//! - [`CoreError`] - shared error type
//!
//! # Architecture
//!
//! ```text
//!  vibrance-cli
//!       |
//!  +----+--------+--------+
//!  |             |        |
//!  vibrance-io   |   vibrance-ops
//!  |             |        |
//!  |      vibrance-color  |
//!  |             |        |
//!  +------+------+--------+
//!         |
//!   vibrance-core
//! ```
//!
//! # Used By
//!
//! - `vibrance-ops` - row-parallel pixel pipeline
//! - `vibrance-io` - image decode/encode
//! - `vibrance-cli` - command-line orchestration

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cancel;
mod error;
mod image;

pub use cancel::CancelToken;
pub use error::{CoreError, CoreResult};
pub use image::PixelBuffer;
