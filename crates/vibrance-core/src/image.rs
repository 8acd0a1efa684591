//! Float image buffer shared by the processing and I/O crates.
//!
//! # Memory Layout
//!
//! Pixels are stored interleaved RGBA, row-major, top-to-bottom:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! Channel values are gamma-encoded sRGB in [0, 1] plus straight alpha.
//! Sources without an alpha channel decode with alpha = 1 and the I/O layer
//! remembers that when it picks an output encoding.
//!
//! Rows are contiguous and non-overlapping, so `chunks_exact_mut(row_len)`
//! partitions the buffer into disjoint row slices that workers can mutate
//! without locking.

use crate::{CoreError, CoreResult};

/// Interleaved f32 RGBA image buffer.
///
/// # Example
///
/// ```rust
/// use vibrance_core::PixelBuffer;
///
/// let mut img = PixelBuffer::filled(4, 2, [0.5, 0.25, 0.0, 1.0]);
/// assert_eq!(img.pixel(3, 1), [0.5, 0.25, 0.0, 1.0]);
/// img.set_pixel(0, 0, [1.0, 0.0, 0.0, 1.0]);
/// assert_eq!(img.row(0)[0], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Channels per pixel. Alpha is always materialized, even for RGB sources.
    pub const CHANNELS: usize = 4;

    /// Creates a transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        let samples = width as usize * height as usize * Self::CHANNELS;
        Self {
            width,
            height,
            data: vec![0.0; samples],
        }
    }

    /// Creates a buffer filled with one pixel value.
    pub fn filled(width: u32, height: u32, pixel: [f32; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * Self::CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wraps existing interleaved RGBA samples.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> CoreResult<Self> {
        let expected = width as usize * height as usize * Self::CHANNELS;
        if data.len() != expected {
            return Err(CoreError::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Samples per row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * Self::CHANNELS
    }

    /// Returns the raw sample data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the raw sample data mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.row_len();
        &self.data[start..start + self.row_len()]
    }

    /// Returns row `y` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let len = self.row_len();
        let start = y as usize * len;
        &mut self.data[start..start + len]
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        let mut px = [0.0; 4];
        px.copy_from_slice(&self.data[offset..offset + Self::CHANNELS]);
        px
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [f32; 4]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = (y as usize * self.width as usize + x as usize) * Self::CHANNELS;
        self.data[offset..offset + Self::CHANNELS].copy_from_slice(&pixel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dimensions() {
        let img = PixelBuffer::new(16, 9);
        assert_eq!(img.dimensions(), (16, 9));
        assert_eq!(img.pixel_count(), 144);
        assert_eq!(img.data().len(), 144 * 4);
    }

    #[test]
    fn test_filled_and_pixel_access() {
        let mut img = PixelBuffer::filled(3, 3, [0.1, 0.2, 0.3, 1.0]);
        assert_eq!(img.pixel(2, 2), [0.1, 0.2, 0.3, 1.0]);
        img.set_pixel(1, 1, [1.0, 0.0, 0.0, 0.5]);
        assert_eq!(img.pixel(1, 1), [1.0, 0.0, 0.0, 0.5]);
        assert_eq!(img.pixel(0, 1), [0.1, 0.2, 0.3, 1.0]);
    }

    #[test]
    fn test_row_slices_are_disjoint() {
        let mut img = PixelBuffer::new(2, 3);
        img.row_mut(1).fill(0.5);
        assert!(img.row(0).iter().all(|&v| v == 0.0));
        assert!(img.row(1).iter().all(|&v| v == 0.5));
        assert!(img.row(2).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_from_data_wrong_size() {
        let result = PixelBuffer::from_data(4, 4, vec![0.0; 10]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_data_roundtrip() {
        let data: Vec<f32> = (0..2 * 2 * 4).map(|i| i as f32 / 16.0).collect();
        let img = PixelBuffer::from_data(2, 2, data.clone()).unwrap();
        assert_eq!(img.data(), data.as_slice());
    }
}
