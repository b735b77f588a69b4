//! Particle state and the per-frame simulation step.
//!
//! A particle is pulled back toward its anchor (the position it was seeded
//! at) by a spring force and pushed away from the cursor while the cursor
//! is inside the particle's influence radius. Velocity is damped every
//! step. Distance from the anchor drives both the draw scale and where the
//! color map is sampled.

use glam::{Vec2, Vec3};

use crate::color::ColorMap;
use crate::math::map_range;

/// Anchor distance at which scale and color reach their far values.
pub const FAR_DISTANCE: f32 = 200.0;
/// Scale at rest.
pub const NEAR_SCALE: f32 = 1.0;
/// Scale at [`FAR_DISTANCE`] (extrapolated beyond it).
pub const FAR_SCALE: f32 = 5.0;
/// Scale a freshly seeded particle draws with before its first step.
pub const INITIAL_SCALE: f32 = 3.0;

/// Behaviour parameters drawn once per particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleParams {
    /// Cursor influence radius; repulsion only applies strictly inside it.
    pub min_distance: f32,
    /// Repulsion coefficient.
    pub push_factor: f32,
    /// Spring coefficient toward the anchor.
    pub pull_factor: f32,
    /// Velocity multiplier applied each step.
    pub damp_factor: f32,
}

/// A filled circle to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center in canvas pixels.
    pub position: Vec2,
    /// Radius in canvas pixels.
    pub radius: f32,
    /// Fill color, RGB `0.0..=1.0`.
    pub color: Vec3,
}

/// One particle of the field.
#[derive(Debug, Clone)]
pub struct Particle<M> {
    position: Vec2,
    anchor: Vec2,
    velocity: Vec2,
    acceleration: Vec2,
    radius: f32,
    scale: f32,
    color: Vec3,
    color_map: M,
    params: ParticleParams,
}

impl<M: ColorMap> Particle<M> {
    /// Create a particle at rest on its anchor.
    pub fn new(position: Vec2, radius: f32, color_map: M, params: ParticleParams) -> Self {
        let color = color_map.sample(0.0);
        Self {
            position,
            anchor: position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius,
            scale: INITIAL_SCALE,
            color,
            color_map,
            params,
        }
    }

    /// Advance one step against a cursor at `cursor`.
    ///
    /// Depends only on this particle's prior state and the cursor; there is
    /// no randomness here.
    pub fn update(&mut self, cursor: Vec2) {
        let to_anchor = self.anchor - self.position;
        let anchor_dist = to_anchor.length();

        self.acceleration = to_anchor * self.params.pull_factor;

        // Scale extrapolates past FAR_DISTANCE; the color parameter does not.
        self.scale = map_range(anchor_dist, 0.0, FAR_DISTANCE, NEAR_SCALE, FAR_SCALE, false);
        self.color = self
            .color_map
            .sample(map_range(anchor_dist, 0.0, FAR_DISTANCE, 0.0, 1.0, true));

        let from_cursor = self.position - cursor;
        let cursor_dist = from_cursor.length();

        // A cursor exactly on the particle has no push direction.
        if cursor_dist < self.params.min_distance && cursor_dist > 0.0 {
            let falloff = self.params.min_distance - cursor_dist;
            self.acceleration += from_cursor / cursor_dist * falloff * self.params.push_factor;
        }

        self.velocity += self.acceleration;
        self.velocity *= self.params.damp_factor;

        self.position += self.velocity;
    }

    /// The draw primitive for the current state.
    #[inline]
    pub fn circle(&self) -> Circle {
        Circle {
            position: self.position,
            radius: self.radius * self.scale,
            color: self.color,
        }
    }

    /// Current position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Rest position fixed at seeding.
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Current velocity.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Acceleration applied in the last step.
    pub fn acceleration(&self) -> Vec2 {
        self.acceleration
    }

    /// Base radius derived from the source image.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Draw scale from the last step.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Display color from the last step.
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// The particle's color map.
    pub fn color_map(&self) -> &M {
        &self.color_map
    }

    /// The particle's fixed parameters.
    pub fn params(&self) -> &ParticleParams {
        &self.params
    }

    /// Move the particle without touching its anchor or velocity.
    ///
    /// Injects an external disturbance; [`update`](Self::update) never calls
    /// it. The spring pulls the particle back over the following steps.
    pub fn displace(&mut self, position: Vec2) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorLerp;
    use crate::input::Cursor;

    const STOP_A: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    const STOP_B: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    fn params() -> ParticleParams {
        ParticleParams {
            min_distance: 150.0,
            push_factor: 0.015,
            pull_factor: 0.004,
            damp_factor: 0.92,
        }
    }

    fn particle_at(position: Vec2) -> Particle<ColorLerp> {
        Particle::new(position, 5.0, ColorLerp::new(STOP_A, STOP_B), params())
    }

    #[test]
    fn test_new_particle_initial_state() {
        let p = particle_at(Vec2::new(3.0, 4.0));
        assert_eq!(p.anchor(), p.position());
        assert_eq!(p.velocity(), Vec2::ZERO);
        assert_eq!(p.scale(), INITIAL_SCALE);
        assert_eq!(p.color(), STOP_A);
    }

    #[test]
    fn test_at_rest_shows_stop_a() {
        let mut p = particle_at(Vec2::new(500.0, 500.0));
        p.update(Cursor::INACTIVE.position());
        assert_eq!(p.color(), STOP_A);
        assert_eq!(p.scale(), NEAR_SCALE);
        assert_eq!(p.position(), p.anchor());
    }

    #[test]
    fn test_far_from_anchor_clamps_to_stop_b() {
        let mut p = particle_at(Vec2::new(500.0, 500.0));
        p.displace(Vec2::new(500.0, 900.0));
        p.update(Cursor::INACTIVE.position());
        assert_eq!(p.color(), STOP_B);
        // Scale keeps growing past the far distance.
        assert!((p.scale() - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_pull_acceleration() {
        let mut p = particle_at(Vec2::ZERO);
        p.displace(Vec2::new(100.0, 0.0));
        p.update(Cursor::INACTIVE.position());
        assert!((p.acceleration().x - (-100.0 * 0.004)).abs() < 1e-6);
        assert!((p.velocity().x - (-0.4 * 0.92)).abs() < 1e-6);
        assert!((p.position().x - (100.0 - 0.368)).abs() < 1e-4);
    }

    #[test]
    fn test_cursor_on_particle_has_no_push() {
        let mut p = particle_at(Vec2::new(1020.0, 1020.0));
        for _ in 0..10 {
            p.update(Vec2::new(1020.0, 1020.0));
            assert_eq!(p.velocity(), Vec2::ZERO);
            assert!(p.position().is_finite());
        }
        assert_eq!(p.position(), p.anchor());
    }

    #[test]
    fn test_push_boundary_exclusive() {
        let mut p = particle_at(Vec2::ZERO);
        p.update(Vec2::new(150.0, 0.0));
        assert_eq!(p.acceleration(), Vec2::ZERO);
        assert_eq!(p.position(), Vec2::ZERO);

        let mut q = particle_at(Vec2::ZERO);
        q.update(Vec2::new(149.0, 0.0));
        assert!(q.acceleration().x < 0.0);
    }

    #[test]
    fn test_push_away_from_cursor() {
        let mut p = particle_at(Vec2::new(1020.0, 1020.0));
        let cursor = Vec2::new(1020.0, 1070.0);
        p.update(cursor);
        assert!((p.acceleration().y - (-100.0 * 0.015)).abs() < 1e-5);
        assert_eq!(p.acceleration().x, 0.0);
        assert!(p.position().distance(cursor) > 50.0);
    }

    #[test]
    fn test_circle_radius_uses_scale() {
        let p = particle_at(Vec2::ZERO);
        assert_eq!(p.circle().radius, 5.0 * INITIAL_SCALE);
    }
}
