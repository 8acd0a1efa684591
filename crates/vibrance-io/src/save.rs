//! The save-format table and output path generation.
//!
//! One row per named output encoding, in stable registration order - the
//! same closed-enum-table shape as the color-space registry, and for the
//! same reason: the set is small, fixed, and matched exhaustively.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::codecs::tiff::TiffEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageBuffer};
use tracing::debug;

use vibrance_core::PixelBuffer;

use crate::{IoError, IoResult};

/// The registered output encodings, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    /// BMP, 24-bit RGB.
    Bmp24,
    /// BMP, 32-bit RGBA.
    Bmp32,
    /// JPEG, quality 75.
    Jpeg75,
    /// JPEG, quality 90.
    Jpeg90,
    /// JPEG, quality 100.
    Jpeg100,
    /// PNG, 8-bit RGB.
    Png8,
    /// PNG, 8-bit RGBA.
    Png8Alpha,
    /// PNG, 16-bit RGB.
    Png16,
    /// PNG, 16-bit RGBA.
    Png16Alpha,
    /// TIFF, 8-bit RGB.
    Tiff8,
    /// TIFF, 8-bit RGBA.
    Tiff8Alpha,
    /// WebP, lossless.
    WebpLossless,
}

impl SaveFormat {
    /// Every registered format, in registration order.
    pub const ALL: [SaveFormat; 12] = [
        SaveFormat::Bmp24,
        SaveFormat::Bmp32,
        SaveFormat::Jpeg75,
        SaveFormat::Jpeg90,
        SaveFormat::Jpeg100,
        SaveFormat::Png8,
        SaveFormat::Png8Alpha,
        SaveFormat::Png16,
        SaveFormat::Png16Alpha,
        SaveFormat::Tiff8,
        SaveFormat::Tiff8Alpha,
        SaveFormat::WebpLossless,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            SaveFormat::Bmp24 => "BMP 24-bit RGB",
            SaveFormat::Bmp32 => "BMP 32-bit RGBA",
            SaveFormat::Jpeg75 => "JPEG quality 75",
            SaveFormat::Jpeg90 => "JPEG quality 90",
            SaveFormat::Jpeg100 => "JPEG quality 100",
            SaveFormat::Png8 => "PNG 8-bit RGB",
            SaveFormat::Png8Alpha => "PNG 8-bit RGBA",
            SaveFormat::Png16 => "PNG 16-bit RGB",
            SaveFormat::Png16Alpha => "PNG 16-bit RGBA",
            SaveFormat::Tiff8 => "TIFF 8-bit RGB",
            SaveFormat::Tiff8Alpha => "TIFF 8-bit RGBA",
            SaveFormat::WebpLossless => "WebP lossless",
        }
    }

    /// Short key accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            SaveFormat::Bmp24 => "bmp24",
            SaveFormat::Bmp32 => "bmp32",
            SaveFormat::Jpeg75 => "jpeg75",
            SaveFormat::Jpeg90 => "jpeg90",
            SaveFormat::Jpeg100 => "jpeg100",
            SaveFormat::Png8 => "png8",
            SaveFormat::Png8Alpha => "png8a",
            SaveFormat::Png16 => "png16",
            SaveFormat::Png16Alpha => "png16a",
            SaveFormat::Tiff8 => "tiff8",
            SaveFormat::Tiff8Alpha => "tiff8a",
            SaveFormat::WebpLossless => "webp",
        }
    }

    /// File extension for generated output paths.
    pub fn extension(self) -> &'static str {
        match self {
            SaveFormat::Bmp24 | SaveFormat::Bmp32 => "bmp",
            SaveFormat::Jpeg75 | SaveFormat::Jpeg90 | SaveFormat::Jpeg100 => "jpg",
            SaveFormat::Png8 | SaveFormat::Png8Alpha | SaveFormat::Png16 | SaveFormat::Png16Alpha => {
                "png"
            }
            SaveFormat::Tiff8 | SaveFormat::Tiff8Alpha => "tif",
            SaveFormat::WebpLossless => "webp",
        }
    }

    /// Looks up a format by key or display name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnknownFormat`] for unregistered names.
    pub fn parse(name: &str) -> IoResult<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(wanted) || f.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| IoError::UnknownFormat(name.to_string()))
    }

    /// Picks the PNG variant matching the source's alpha and bit depth.
    pub fn default_for(has_alpha: bool, sixteen_bit: bool) -> Self {
        match (has_alpha, sixteen_bit) {
            (false, false) => SaveFormat::Png8,
            (true, false) => SaveFormat::Png8Alpha,
            (false, true) => SaveFormat::Png16,
            (true, true) => SaveFormat::Png16Alpha,
        }
    }

    /// Encodes `buffer` to `path` with this format's codec configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Io`] for filesystem failures and
    /// [`IoError::Encode`] for codec failures.
    pub fn save(self, path: &Path, buffer: &PixelBuffer) -> IoResult<()> {
        debug!(path = %path.display(), format = self.key(), "encoding image");
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let image = self.to_dynamic(buffer)?;
        let result = match self {
            SaveFormat::Bmp24 | SaveFormat::Bmp32 => {
                image.write_with_encoder(BmpEncoder::new(&mut writer))
            }
            SaveFormat::Jpeg75 => {
                image.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, 75))
            }
            SaveFormat::Jpeg90 => {
                image.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, 90))
            }
            SaveFormat::Jpeg100 => {
                image.write_with_encoder(JpegEncoder::new_with_quality(&mut writer, 100))
            }
            SaveFormat::Png8
            | SaveFormat::Png8Alpha
            | SaveFormat::Png16
            | SaveFormat::Png16Alpha => image.write_with_encoder(PngEncoder::new_with_quality(
                &mut writer,
                CompressionType::Best,
                FilterType::Adaptive,
            )),
            SaveFormat::Tiff8 | SaveFormat::Tiff8Alpha => {
                image.write_with_encoder(TiffEncoder::new(&mut writer))
            }
            SaveFormat::WebpLossless => {
                image.write_with_encoder(WebPEncoder::new_lossless(&mut writer))
            }
        };
        result.map_err(|e| IoError::Encode(e.to_string()))?;
        writer.flush()?;
        Ok(())
    }

    /// Converts the float buffer into the channel layout this format encodes.
    fn to_dynamic(self, buffer: &PixelBuffer) -> IoResult<DynamicImage> {
        let (w, h) = buffer.dimensions();
        let data = buffer.data();
        let no_room = || IoError::Encode("buffer size mismatch".to_string());

        let image = match self {
            SaveFormat::Bmp32
            | SaveFormat::Png8Alpha
            | SaveFormat::Tiff8Alpha
            | SaveFormat::WebpLossless => {
                let rgba: Vec<u8> = data.iter().map(|&v| quantize_u8(v)).collect();
                DynamicImage::ImageRgba8(ImageBuffer::from_raw(w, h, rgba).ok_or_else(no_room)?)
            }
            SaveFormat::Png16Alpha => {
                let rgba: Vec<u16> = data.iter().map(|&v| quantize_u16(v)).collect();
                DynamicImage::ImageRgba16(ImageBuffer::from_raw(w, h, rgba).ok_or_else(no_room)?)
            }
            SaveFormat::Png16 => {
                let rgb: Vec<u16> = drop_alpha(data).map(quantize_u16).collect();
                DynamicImage::ImageRgb16(ImageBuffer::from_raw(w, h, rgb).ok_or_else(no_room)?)
            }
            SaveFormat::Bmp24
            | SaveFormat::Jpeg75
            | SaveFormat::Jpeg90
            | SaveFormat::Jpeg100
            | SaveFormat::Png8
            | SaveFormat::Tiff8 => {
                let rgb: Vec<u8> = drop_alpha(data).map(quantize_u8).collect();
                DynamicImage::ImageRgb8(ImageBuffer::from_raw(w, h, rgb).ok_or_else(no_room)?)
            }
        };
        Ok(image)
    }
}

impl std::fmt::Display for SaveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[inline]
fn quantize_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
fn quantize_u16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0).round() as u16
}

/// Iterates RGB samples out of interleaved RGBA data.
fn drop_alpha(data: &[f32]) -> impl Iterator<Item = f32> + '_ {
    data.chunks_exact(PixelBuffer::CHANNELS)
        .flat_map(|px| px[..3].iter().copied())
}

/// Derives a collision-free output path next to the input.
///
/// `photo.png` becomes `photo_saturated.png`; if that exists the counter
/// kicks in: `photo_saturated_2.png`, `photo_saturated_3.png`, ...
///
/// # Errors
///
/// Returns [`IoError::InvalidPath`] when the input has no usable file stem.
pub fn output_path(input: &Path, extension: &str) -> IoResult<PathBuf> {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| IoError::InvalidPath(input.display().to_string()))?;
    let dir = match input.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };

    let mut candidate = dir.join(format!("{stem}_saturated.{extension}"));
    let mut counter = 2;
    while candidate.exists() {
        candidate = dir.join(format!("{stem}_saturated_{counter}.{extension}"));
        counter += 1;
    }
    Ok(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read;

    #[test]
    fn test_table_order_is_stable() {
        let keys: Vec<_> = SaveFormat::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(
            keys,
            [
                "bmp24", "bmp32", "jpeg75", "jpeg90", "jpeg100", "png8", "png8a", "png16",
                "png16a", "tiff8", "tiff8a", "webp"
            ]
        );
    }

    #[test]
    fn test_parse_key_name_and_unknown() {
        assert_eq!(SaveFormat::parse("png16a").unwrap(), SaveFormat::Png16Alpha);
        assert_eq!(
            SaveFormat::parse("WebP lossless").unwrap(),
            SaveFormat::WebpLossless
        );
        assert!(matches!(
            SaveFormat::parse("gif"),
            Err(IoError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_default_format_tracks_source_traits() {
        assert_eq!(SaveFormat::default_for(false, false), SaveFormat::Png8);
        assert_eq!(SaveFormat::default_for(true, false), SaveFormat::Png8Alpha);
        assert_eq!(SaveFormat::default_for(false, true), SaveFormat::Png16);
        assert_eq!(SaveFormat::default_for(true, true), SaveFormat::Png16Alpha);
    }

    #[test]
    fn test_output_path_collision_counter() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo.png");
        std::fs::write(&input, b"x").unwrap();

        let first = output_path(&input, "png").unwrap();
        assert_eq!(first.file_name().unwrap(), "photo_saturated.png");

        std::fs::write(&first, b"x").unwrap();
        let second = output_path(&input, "png").unwrap();
        assert_eq!(second.file_name().unwrap(), "photo_saturated_2.png");

        std::fs::write(&second, b"x").unwrap();
        let third = output_path(&input, "png").unwrap();
        assert_eq!(third.file_name().unwrap(), "photo_saturated_3.png");
    }

    #[test]
    fn test_png_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let mut buffer = PixelBuffer::filled(5, 3, [0.2, 0.6, 0.9, 1.0]);
        buffer.set_pixel(0, 0, [1.0, 0.0, 0.5, 1.0]);
        SaveFormat::Png8Alpha.save(&path, &buffer).unwrap();

        let loaded = read(&path).unwrap();
        assert!(loaded.has_alpha);
        assert!(!loaded.sixteen_bit);
        assert_eq!(loaded.buffer.dimensions(), (5, 3));
        for (a, b) in loaded.buffer.data().iter().zip(buffer.data()) {
            assert!((a - b).abs() < 0.003, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_png16_roundtrip_keeps_depth() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.png");

        let buffer = PixelBuffer::filled(4, 4, [0.1234, 0.5678, 0.9012, 1.0]);
        SaveFormat::Png16.save(&path, &buffer).unwrap();

        let loaded = read(&path).unwrap();
        assert!(loaded.sixteen_bit);
        assert!(!loaded.has_alpha);
        for (a, b) in loaded.buffer.data().iter().zip(buffer.data()) {
            assert!((a - b).abs() < 1e-4, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_webp_lossless_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.webp");

        let buffer = PixelBuffer::filled(6, 6, [0.25, 0.5, 0.75, 1.0]);
        SaveFormat::WebpLossless.save(&path, &buffer).unwrap();

        let loaded = read(&path).unwrap();
        for (a, b) in loaded.buffer.data().iter().zip(buffer.data()) {
            assert!((a - b).abs() < 0.003, "{} vs {}", a, b);
        }
    }
}
