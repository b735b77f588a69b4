//! The particle pool.
//!
//! A [`ParticleField`] is created once by the seeding pass and never
//! resized. Each frame it is sorted by scale and every particle is stepped
//! and turned into a [`Circle`].
//!
//! # Seeding
//!
//! For every ring position the two source images are sampled at the same
//! canvas location. Image A's red channel sets the base radius and its color
//! becomes the color map's start; image B's color becomes the end.
//!
//! ```ignore
//! let mut ctx = SeedContext::from_seed(1);
//! let mut field = ParticleField::seed(
//!     &LayoutConfig::default(),
//!     Vec2::splat(CANVAS_SIZE),
//!     &image_a,
//!     &image_b,
//!     &mut ctx,
//!     ColorLerp::new,
//! );
//!
//! // Per frame:
//! for circle in field.frame(cursor.position()) {
//!     draw(circle);
//! }
//! ```

use glam::Vec2;

use crate::color::{rgb8, ColorLerp, ColorMap};
use crate::image_source::PixelBuffer;
use crate::layout::LayoutConfig;
use crate::math::map_range;
use crate::particle::{Circle, Particle};
use crate::spawn::SeedContext;

/// Logical canvas edge length in pixels (the canvas is square).
pub const CANVAS_SIZE: f32 = 2040.0;

/// Red channel range mapped onto the base radius range.
const RED_RANGE: (f32, f32) = (0.0, 270.0);
/// Base radius range.
const RADIUS_RANGE: (f32, f32) = (2.0, 12.0);

/// Base radius for a sampled red channel value.
#[inline]
pub fn radius_for_red(red: f32) -> f32 {
    map_range(red, RED_RANGE.0, RED_RANGE.1, RADIUS_RANGE.0, RADIUS_RANGE.1, true)
}

/// Fixed-size pool of particles plus the per-frame draw list.
#[derive(Debug, Clone)]
pub struct ParticleField<M = ColorLerp> {
    particles: Vec<Particle<M>>,
    circles: Vec<Circle>,
}

impl<M: ColorMap> ParticleField<M> {
    /// Wrap an existing set of particles.
    pub fn from_particles(particles: Vec<Particle<M>>) -> Self {
        let circles = Vec::with_capacity(particles.len());
        Self { particles, circles }
    }

    /// Lay out rings across `canvas` and seed one particle per position.
    ///
    /// `interpolate` builds each particle's color map from the two colors
    /// sampled under it (image A first). It runs exactly once per particle.
    pub fn seed<F>(
        layout: &LayoutConfig,
        canvas: Vec2,
        image_a: &PixelBuffer,
        image_b: &PixelBuffer,
        ctx: &mut SeedContext,
        mut interpolate: F,
    ) -> Self
    where
        F: FnMut(glam::Vec3, glam::Vec3) -> M,
    {
        for ring in layout.rings() {
            log::debug!(
                "ring {:>2}: radius {:>7.1}, fit {:.2}, {} dots",
                ring.index,
                ring.radius,
                ring.fit_radius,
                ring.count
            );
        }

        let center = canvas * 0.5;
        let mut particles = Vec::with_capacity(layout.total_count());

        for position in layout.positions(center) {
            let a = image_a.sample_canvas(position, canvas);
            let b = image_b.sample_canvas(position, canvas);

            let radius = radius_for_red(a[0] as f32);
            let color_map = interpolate(rgb8(a), rgb8(b));

            particles.push(Particle::new(position, radius, color_map, ctx.particle_params()));
        }

        log::info!(
            "Seeded {} particles on {} rings (seed {})",
            particles.len(),
            layout.ring_count,
            ctx.seed()
        );

        Self::from_particles(particles)
    }

    /// Number of particles. Fixed for the field's lifetime.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field has no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particles in their current order.
    pub fn particles(&self) -> &[Particle<M>] {
        &self.particles
    }

    /// Step every particle once without reordering or drawing.
    pub fn step(&mut self, cursor: Vec2) {
        for particle in &mut self.particles {
            particle.update(cursor);
        }
    }

    /// Run one frame and return the circles to draw, back to front.
    ///
    /// Particles are stably sorted by the scale from their previous step so
    /// the most displaced ones draw on top. This is a cosmetic depth cue,
    /// not real depth ordering.
    pub fn frame(&mut self, cursor: Vec2) -> &[Circle] {
        self.particles.sort_by(|a, b| a.scale().total_cmp(&b.scale()));

        self.circles.clear();
        for particle in &mut self.particles {
            particle.update(cursor);
            self.circles.push(particle.circle());
        }
        &self.circles
    }

    /// Circles produced by the last [`frame`](Self::frame).
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Cursor;
    use crate::particle::ParticleParams;
    use glam::Vec3;

    fn params() -> ParticleParams {
        ParticleParams {
            min_distance: 150.0,
            push_factor: 0.015,
            pull_factor: 0.004,
            damp_factor: 0.92,
        }
    }

    #[test]
    fn test_radius_for_red() {
        assert_eq!(radius_for_red(0.0), 2.0);
        assert!((radius_for_red(135.0) - 7.0).abs() < 1e-5);
        assert_eq!(radius_for_red(400.0), 12.0);
    }

    #[test]
    fn test_seed_uses_image_colors() {
        let a = PixelBuffer::solid([135, 10, 20]);
        let b = PixelBuffer::solid([0, 200, 0]);
        let mut ctx = SeedContext::from_seed(3);
        let field = ParticleField::seed(
            &LayoutConfig::default(),
            Vec2::splat(CANVAS_SIZE),
            &a,
            &b,
            &mut ctx,
            ColorLerp::new,
        );

        assert_eq!(field.len(), LayoutConfig::default().total_count());
        let first = &field.particles()[0];
        assert_eq!(first.position(), Vec2::splat(CANVAS_SIZE * 0.5));
        assert!((first.radius() - 7.0).abs() < 1e-5);
        assert_eq!(first.color_map().from, rgb8([135, 10, 20]));
        assert_eq!(first.color_map().to, rgb8([0, 200, 0]));
    }

    #[test]
    fn test_interpolate_called_once_per_particle() {
        let img = PixelBuffer::solid([1, 2, 3]);
        let mut calls = 0usize;
        let mut ctx = SeedContext::from_seed(5);
        let field = ParticleField::seed(
            &LayoutConfig::default(),
            Vec2::splat(CANVAS_SIZE),
            &img,
            &img,
            &mut ctx,
            |a, b| {
                calls += 1;
                ColorLerp::new(a, b)
            },
        );
        assert_eq!(calls, field.len());
    }

    #[test]
    fn test_frame_sorts_by_scale_and_keeps_count() {
        let map = ColorLerp::new(Vec3::ZERO, Vec3::ONE);
        let mut far = Particle::new(Vec2::ZERO, 4.0, map, params());
        far.displace(Vec2::new(0.0, 300.0));
        far.update(Cursor::INACTIVE.position());
        let mut near = Particle::new(Vec2::new(500.0, 0.0), 4.0, map, params());
        near.update(Cursor::INACTIVE.position());

        let mut field = ParticleField::from_particles(vec![far, near]);
        let circles = field.frame(Cursor::INACTIVE.position()).to_vec();

        assert_eq!(circles.len(), 2);
        assert_eq!(field.len(), 2);
        // The resting particle draws first, the displaced one on top.
        assert_eq!(field.particles()[0].anchor(), Vec2::new(500.0, 0.0));
        assert!(circles[1].radius > circles[0].radius);
    }

    #[test]
    fn test_stable_sort_for_equal_scale() {
        let map = ColorLerp::new(Vec3::ZERO, Vec3::ONE);
        let particles: Vec<_> = (0..5)
            .map(|i| Particle::new(Vec2::new(i as f32 * 10.0, 0.0), 1.0, map, params()))
            .collect();
        let mut field = ParticleField::from_particles(particles);
        field.frame(Cursor::INACTIVE.position());
        let xs: Vec<f32> = field.particles().iter().map(|p| p.anchor().x).collect();
        assert_eq!(xs, vec![0.0, 10.0, 20.0, 30.0, 40.0]);
    }
}
