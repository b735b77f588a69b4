//! Color maps and palettes.
//!
//! Every particle owns a [`ColorMap`]: a function from a normalized
//! parameter in `[0, 1]` to an RGB color (each channel `0.0..=1.0`). The
//! field evaluates it every frame with the particle's distance from its
//! anchor, so resting particles show the map's start color and displaced
//! particles drift toward its end color.
//!
//! # Usage
//!
//! ```ignore
//! use ringfield::color::{ColorLerp, ColorMap, Palette};
//!
//! let map = ColorLerp::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0));
//! let purple = map.sample(0.5);
//!
//! let shades = Palette::Viridis.ramp(20);
//! ```

use glam::Vec3;

/// A one-parameter color function.
///
/// Implementations must be pure: the same `t` always yields the same color.
/// Callers clamp `t` to `[0, 1]` before sampling.
pub trait ColorMap {
    /// Evaluate the map at `t` (expected in `[0, 1]`).
    fn sample(&self, t: f32) -> Vec3;
}

/// Two-stop linear interpolation in RGB space.
///
/// `sample(0.0)` returns `from` and `sample(1.0)` returns `to` exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorLerp {
    /// Color at `t = 0`.
    pub from: Vec3,
    /// Color at `t = 1`.
    pub to: Vec3,
}

impl ColorLerp {
    /// Create a map from `from` to `to`.
    pub fn new(from: Vec3, to: Vec3) -> Self {
        Self { from, to }
    }
}

impl ColorMap for ColorLerp {
    #[inline]
    fn sample(&self, t: f32) -> Vec3 {
        // Weighted sum keeps both endpoints bit-exact.
        self.from * (1.0 - t) + self.to * t
    }
}

/// Convert an 8-bit RGB triple to a `Vec3` in `0.0..=1.0`.
#[inline]
pub fn rgb8(rgb: [u8; 3]) -> Vec3 {
    Vec3::new(rgb[0] as f32, rgb[1] as f32, rgb[2] as f32) / 255.0
}

/// Convert a `Vec3` color back to 8-bit RGB, clamping out-of-range channels.
#[inline]
pub fn to_rgb8(color: Vec3) -> [u8; 3] {
    let c = (color.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
    [c.x as u8, c.y as u8, c.z as u8]
}

/// Named color ramps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Viridis - perceptually uniform, colorblind-friendly (purple to yellow).
    #[default]
    Viridis,

    /// Magma - perceptually uniform (black to yellow through red).
    Magma,

    /// Grayscale - black to white.
    Grayscale,
}

impl Palette {
    /// The palette's control colors (5 stops, evenly spaced).
    pub fn colors(&self) -> [Vec3; 5] {
        match self {
            Palette::Viridis => [
                Vec3::new(0.267, 0.004, 0.329), // Dark purple
                Vec3::new(0.282, 0.140, 0.458), // Purple
                Vec3::new(0.127, 0.566, 0.551), // Teal
                Vec3::new(0.369, 0.789, 0.383), // Green
                Vec3::new(0.993, 0.906, 0.144), // Yellow
            ],
            Palette::Magma => [
                Vec3::new(0.001, 0.0, 0.014),   // Black
                Vec3::new(0.329, 0.071, 0.435), // Purple
                Vec3::new(0.716, 0.215, 0.475), // Pink
                Vec3::new(0.994, 0.541, 0.380), // Orange
                Vec3::new(0.987, 0.991, 0.749), // Light yellow
            ],
            Palette::Grayscale => [
                Vec3::new(0.0, 0.0, 0.0), // Black
                Vec3::new(0.25, 0.25, 0.25),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(0.75, 0.75, 0.75),
                Vec3::new(1.0, 1.0, 1.0), // White
            ],
        }
    }

    /// Continuous sample of the palette at `t` (clamped to `[0, 1]`).
    pub fn sample(&self, t: f32) -> Vec3 {
        let stops = self.colors();
        let last = stops.len() - 1;
        let scaled = t.clamp(0.0, 1.0) * last as f32;
        let i = (scaled.floor() as usize).min(last - 1);
        ColorLerp::new(stops[i], stops[i + 1]).sample(scaled - i as f32)
    }

    /// Build `n` evenly spaced color stops from the first to the last color.
    ///
    /// `ramp(1)` yields only the first color; `ramp(0)` is empty.
    pub fn ramp(&self, n: usize) -> Vec<Vec3> {
        match n {
            0 => Vec::new(),
            1 => vec![self.sample(0.0)],
            _ => (0..n)
                .map(|i| self.sample(i as f32 / (n - 1) as f32))
                .collect(),
        }
    }
}

impl<M: ColorMap + ?Sized> ColorMap for Box<M> {
    #[inline]
    fn sample(&self, t: f32) -> Vec3 {
        (**self).sample(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_exact() {
        let a = Vec3::new(0.1, 0.7, 0.3);
        let b = Vec3::new(0.9, 0.2, 0.6);
        let map = ColorLerp::new(a, b);
        assert_eq!(map.sample(0.0), a);
        assert_eq!(map.sample(1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let map = ColorLerp::new(Vec3::ZERO, Vec3::ONE);
        assert!((map.sample(0.5) - Vec3::splat(0.5)).length() < 1e-6);
    }

    #[test]
    fn test_rgb8_roundtrip_extremes() {
        assert_eq!(rgb8([255, 0, 255]), Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(to_rgb8(Vec3::new(2.0, -1.0, 0.5)), [255, 0, 128]);
    }

    #[test]
    fn test_ramp_length_and_ends() {
        let ramp = Palette::Viridis.ramp(20);
        assert_eq!(ramp.len(), 20);
        let colors = Palette::Viridis.colors();
        assert!((ramp[0] - colors[0]).length() < 1e-6);
        assert!((ramp[19] - colors[4]).length() < 1e-6);
    }

    #[test]
    fn test_ramp_degenerate_sizes() {
        assert!(Palette::Magma.ramp(0).is_empty());
        assert_eq!(Palette::Magma.ramp(1).len(), 1);
    }

    #[test]
    fn test_boxed_map() {
        let boxed: Box<dyn ColorMap> = Box::new(ColorLerp::new(Vec3::ZERO, Vec3::X));
        assert_eq!(boxed.sample(1.0), Vec3::X);
    }
}
