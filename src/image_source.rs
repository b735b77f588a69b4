//! Source images that particles sample their colors from.
//!
//! A [`PixelBuffer`] is a decoded RGBA image addressable by integer
//! `(x, y)`. Particles are seeded in canvas coordinates; the buffer maps a
//! canvas position onto its own pixel grid by scaling against the canvas
//! size, so images never need to match the canvas (or each other) in size.
//!
//! Sampling never reads outside the buffer: coordinates are floored and
//! clamped to the valid index range.
//!
//! # Supported Formats
//!
//! - PNG
//! - JPEG

use std::path::Path;

use glam::Vec2;

use crate::color::{to_rgb8, Palette};
use crate::error::ImageError;

/// Decoded RGBA pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Raw RGBA pixel data (width * height * 4 bytes).
    data: Vec<u8>,
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
}

impl PixelBuffer {
    /// Create a buffer from raw RGBA data (4 bytes per pixel, row-major).
    ///
    /// # Example
    ///
    /// ```ignore
    /// // 2x1: red then blue
    /// let buf = PixelBuffer::from_rgba(vec![255, 0, 0, 255, 0, 0, 255, 255], 2, 1)?;
    /// ```
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::Empty);
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { data, width, height })
    }

    /// Load and decode an image file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let img = image::load_from_memory(&bytes)?.into_rgba8();
        let (width, height) = img.dimensions();
        log::info!("Loaded '{}' ({}x{})", path.display(), width, height);
        Self::from_rgba(img.into_raw(), width, height)
    }

    /// Create a single-color buffer (1x1 pixel).
    pub fn solid(rgb: [u8; 3]) -> Self {
        Self {
            data: vec![rgb[0], rgb[1], rgb[2], 255],
            width: 1,
            height: 1,
        }
    }

    /// Create a square radial gradient through `palette`.
    ///
    /// The center samples the palette start and the corners its end. Used
    /// in place of photographs when no image files are supplied.
    pub fn radial_gradient(size: u32, palette: Palette) -> Self {
        let size = size.max(1);
        let center = Vec2::splat(size as f32 * 0.5);
        let max_dist = center.length().max(1.0);

        let mut data = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let rgb = to_rgb8(palette.sample(p.distance(center) / max_dist));
                data.extend_from_slice(&rgb);
                data.push(255);
            }
        }

        Self {
            data,
            width: size,
            height: size,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGB at `(x, y)`, with both coordinates clamped into the image.
    #[inline]
    pub fn pixel(&self, x: i64, y: i64) -> [u8; 3] {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        let idx = (y * self.width as usize + x) * 4;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    /// Pixel coordinate for a canvas position: `floor(pos / canvas * image)`,
    /// clamped into the image.
    #[inline]
    pub fn pixel_coords(&self, position: Vec2, canvas: Vec2) -> (i64, i64) {
        let x = (position.x / canvas.x * self.width as f32).floor() as i64;
        let y = (position.y / canvas.y * self.height as f32).floor() as i64;
        (
            x.clamp(0, self.width as i64 - 1),
            y.clamp(0, self.height as i64 - 1),
        )
    }

    /// RGB under a canvas position.
    #[inline]
    pub fn sample_canvas(&self, position: Vec2, canvas: Vec2) -> [u8; 3] {
        let (x, y) = self.pixel_coords(position, canvas);
        self.pixel(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> PixelBuffer {
        // 2x2: red, green / blue, white
        PixelBuffer::from_rgba(
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, //
                0, 0, 255, 255, 255, 255, 255, 255,
            ],
            2,
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_from_rgba_rejects_bad_size() {
        let err = PixelBuffer::from_rgba(vec![0; 12], 2, 2).unwrap_err();
        assert!(matches!(err, ImageError::SizeMismatch { expected: 16, actual: 12 }));
    }

    #[test]
    fn test_from_rgba_rejects_empty() {
        assert!(matches!(
            PixelBuffer::from_rgba(Vec::new(), 0, 4),
            Err(ImageError::Empty)
        ));
    }

    #[test]
    fn test_canvas_mapping() {
        let buf = quad();
        let canvas = Vec2::new(100.0, 100.0);
        assert_eq!(buf.sample_canvas(Vec2::new(10.0, 10.0), canvas), [255, 0, 0]);
        assert_eq!(buf.sample_canvas(Vec2::new(75.0, 25.0), canvas), [0, 255, 0]);
        assert_eq!(buf.sample_canvas(Vec2::new(25.0, 75.0), canvas), [0, 0, 255]);
    }

    #[test]
    fn test_out_of_range_clamps() {
        let buf = quad();
        let canvas = Vec2::new(100.0, 100.0);
        assert_eq!(buf.pixel_coords(Vec2::new(-5.0, 300.0), canvas), (0, 1));
        assert_eq!(buf.pixel_coords(Vec2::new(100.0, 100.0), canvas), (1, 1));
        assert_eq!(buf.pixel(9, -9), [0, 255, 0]);
    }

    #[test]
    fn test_different_image_sizes_scale_independently() {
        let small = PixelBuffer::solid([10, 20, 30]);
        let canvas = Vec2::new(2040.0, 2040.0);
        assert_eq!(small.pixel_coords(Vec2::new(1500.0, 1500.0), canvas), (0, 0));
        assert_eq!(quad().pixel_coords(Vec2::new(1500.0, 1500.0), canvas), (1, 1));
    }

    #[test]
    fn test_radial_gradient_dimensions() {
        let buf = PixelBuffer::radial_gradient(16, Palette::Grayscale);
        assert_eq!((buf.width(), buf.height()), (16, 16));
        // Center is darker than the corner.
        assert!(buf.pixel(8, 8)[0] < buf.pixel(0, 0)[0]);
    }
}
