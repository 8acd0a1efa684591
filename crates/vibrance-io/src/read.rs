//! Image decoding into the shared pixel buffer.

use std::path::Path;

use image::ImageReader;
use tracing::debug;

use vibrance_core::PixelBuffer;

use crate::{IoError, IoResult};

/// A decoded image plus the source traits the save side cares about.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// Pixels as f32 RGBA; sources without alpha decode with alpha = 1.
    pub buffer: PixelBuffer,
    /// Whether the source file carried an alpha channel.
    pub has_alpha: bool,
    /// Whether the source file carried more than 8 bits per channel.
    pub sixteen_bit: bool,
}

/// Reads an image file, auto-detecting the format from its content.
///
/// All supported formats (BMP, JPEG, PNG, TIFF, WebP and whatever else the
/// `image` crate recognizes) decode into the same f32 RGBA buffer;
/// 16-bit sources keep their precision through the float conversion.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be opened and
/// [`IoError::Decode`] for unrecognized or corrupt content.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<LoadedImage> {
    let path = path.as_ref();
    let dynamic = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| IoError::Decode(e.to_string()))?;

    let color = dynamic.color();
    let has_alpha = color.has_alpha();
    let sixteen_bit = color.bytes_per_pixel() / color.channel_count() > 1;
    debug!(
        path = %path.display(),
        width = dynamic.width(),
        height = dynamic.height(),
        ?color,
        "decoded image"
    );

    let (width, height) = (dynamic.width(), dynamic.height());
    let data: Vec<f32> = if sixteen_bit {
        dynamic
            .to_rgba16()
            .into_raw()
            .iter()
            .map(|&v| v as f32 / 65535.0)
            .collect()
    } else {
        dynamic
            .to_rgba8()
            .into_raw()
            .iter()
            .map(|&v| v as f32 / 255.0)
            .collect()
    };

    let buffer = PixelBuffer::from_data(width, height, data)
        .map_err(|e| IoError::Decode(e.to_string()))?;
    Ok(LoadedImage {
        buffer,
        has_alpha,
        sixteen_bit,
    })
}
