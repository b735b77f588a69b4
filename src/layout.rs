//! Concentric ring layout.
//!
//! Seed positions are laid out on rings walking outward from the canvas
//! center. Ring 0 holds a single dot at the center; every later ring holds
//! as many dots as fit around its circumference at the ring's pitch. Dot
//! size shrinks with ring index along an ease-out curve, so outer rings are
//! denser and finer.
//!
//! ```ignore
//! let layout = LayoutConfig::default();
//! for ring in layout.rings() {
//!     println!("ring {} r={} dots={}", ring.index, ring.radius, ring.count);
//! }
//! let seeds: Vec<Vec2> = layout.positions(Vec2::splat(1020.0)).collect();
//! ```

use std::f32::consts::TAU;

use glam::Vec2;

use crate::math::quad_out;

/// Fixed geometry constants for the ring layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Number of concentric rings.
    pub ring_count: u32,
    /// Extra space added between consecutive rings.
    pub ring_gap: f32,
    /// Minimum spacing between neighbouring dots on a ring.
    pub dot_pitch: f32,
    /// Dot fit radius on ring 0.
    pub dot_radius: f32,
    /// Radius of ring 0.
    pub initial_radius: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ring_count: 90,
            ring_gap: 9.0,
            dot_pitch: 16.0,
            dot_radius: 9.0,
            initial_radius: 20.0,
        }
    }
}

/// One ring of the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Ring index, 0 is innermost.
    pub index: u32,
    /// Distance from the center to the dots on this ring.
    pub radius: f32,
    /// Dot fit radius on this ring.
    pub fit_radius: f32,
    /// Number of dots on this ring.
    pub count: u32,
}

impl Ring {
    /// Offset of dot `j` from the layout center.
    ///
    /// Ring 0 sits exactly on the center.
    #[inline]
    pub fn offset(&self, j: u32) -> Vec2 {
        if self.index == 0 {
            return Vec2::ZERO;
        }
        let theta = TAU / self.count as f32 * j as f32;
        Vec2::new(theta.cos(), theta.sin()) * self.radius
    }
}

impl LayoutConfig {
    /// Dot fit radius for ring `index`: `(1 - quad_out(index / ring_count)) * dot_radius`.
    #[inline]
    pub fn fit_radius(&self, index: u32) -> f32 {
        let t = index as f32 / self.ring_count.max(1) as f32;
        (1.0 - quad_out(t)) * self.dot_radius
    }

    /// Dots that fit on a ring of `radius` whose dots have `fit_radius`.
    #[inline]
    pub fn dots_on_ring(&self, radius: f32, fit_radius: f32) -> u32 {
        let circumference = TAU * radius;
        (circumference / (fit_radius * 2.0 + self.dot_pitch)).floor() as u32
    }

    /// Walk the rings from the center outward.
    pub fn rings(&self) -> impl Iterator<Item = Ring> + '_ {
        let mut radius = self.initial_radius;
        (0..self.ring_count).map(move |index| {
            let fit_radius = self.fit_radius(index);
            let count = if index == 0 {
                1
            } else {
                self.dots_on_ring(radius, fit_radius)
            };
            let ring = Ring {
                index,
                radius,
                fit_radius,
                count,
            };
            radius += fit_radius * 2.0 + self.ring_gap;
            ring
        })
    }

    /// Seed positions in ring-then-angle order around `center`.
    pub fn positions(&self, center: Vec2) -> impl Iterator<Item = Vec2> + '_ {
        self.rings()
            .flat_map(move |ring| (0..ring.count).map(move |j| center + ring.offset(j)))
    }

    /// Total number of dots across all rings.
    pub fn total_count(&self) -> usize {
        self.rings().map(|r| r.count as usize).sum()
    }
}
