//! Seeding context for particle initialization.
//!
//! Every particle draws four behaviour parameters once, at creation, and
//! keeps them for its whole lifetime. The draws come from a [`SeedContext`]
//! so tests and reproducible runs can inject a fixed seed instead of
//! relying on ambient randomness.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::particle::ParticleParams;

/// Range of the cursor influence radius.
pub const MIN_DISTANCE_RANGE: (f32, f32) = (100.0, 200.0);
/// Range of the cursor push coefficient.
pub const PUSH_FACTOR_RANGE: (f32, f32) = (0.01, 0.02);
/// Range of the anchor pull coefficient.
pub const PULL_FACTOR_RANGE: (f32, f32) = (0.002, 0.006);
/// Range of the per-step velocity damping.
pub const DAMP_FACTOR_RANGE: (f32, f32) = (0.90, 0.95);

/// Random source handed to the seeding pass.
pub struct SeedContext {
    /// Seed the RNG was created from (logged so runs can be replayed).
    seed: u64,
    rng: SmallRng,
}

impl SeedContext {
    /// Create a context seeded from the wall clock, different each run.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::from_seed(seed)
    }

    /// Create a deterministic context.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// The seed this context was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random f32 in `[min, max)`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Draw an independent parameter record for one particle.
    pub fn particle_params(&mut self) -> ParticleParams {
        ParticleParams {
            min_distance: self.random_range(MIN_DISTANCE_RANGE.0, MIN_DISTANCE_RANGE.1),
            push_factor: self.random_range(PUSH_FACTOR_RANGE.0, PUSH_FACTOR_RANGE.1),
            pull_factor: self.random_range(PULL_FACTOR_RANGE.0, PULL_FACTOR_RANGE.1),
            damp_factor: self.random_range(DAMP_FACTOR_RANGE.0, DAMP_FACTOR_RANGE.1),
        }
    }
}

impl Default for SeedContext {
    fn default() -> Self {
        Self::new()
    }
}
