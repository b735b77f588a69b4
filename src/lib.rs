//! # Ring Field
//!
//! An animated, cursor-reactive field of particles arranged in concentric
//! rings. Each particle takes its size and resting color from one image and
//! its "disturbed" color from a second image, and springs back to where it
//! was seeded after the cursor pushes it away.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ringfield::prelude::*;
//!
//! fn main() -> Result<(), AppError> {
//!     Simulation::new()
//!         .with_images(
//!             PixelBuffer::from_file("a.jpg")?,
//!             PixelBuffer::from_file("b.jpg")?,
//!         )
//!         .run()
//! }
//! ```
//!
//! ## Without a window
//!
//! The layout and simulation are plain data and can be driven directly:
//!
//! ```ignore
//! use ringfield::prelude::*;
//!
//! let mut ctx = SeedContext::from_seed(42);
//! let mut field = ParticleField::seed(
//!     &LayoutConfig::default(),
//!     Vec2::splat(CANVAS_SIZE),
//!     &image_a,
//!     &image_b,
//!     &mut ctx,
//!     ColorLerp::new,
//! );
//!
//! let cursor = Cursor::at(Vec2::new(1020.0, 1070.0));
//! for circle in field.frame(cursor.position()) {
//!     // fill circle.position / circle.radius / circle.color
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Layout
//!
//! [`LayoutConfig`] walks 90 rings outward from the canvas center. Ring 0 is
//! a single dot; later rings fit as many dots as their circumference allows,
//! with dot size easing down as rings grow.
//!
//! ### Seeding
//!
//! Both images are sampled under each dot. Image A's red channel maps to the
//! base radius (`[0, 270]` → `[2, 12]`, clamped); the two sampled colors
//! become the particle's [`ColorMap`]. Per-particle spring, push, damping and
//! influence parameters are drawn from a [`SeedContext`].
//!
//! ### Simulation
//!
//! Every frame each particle is pulled toward its anchor, pushed away from
//! the cursor when closer than its influence radius, damped, and moved. Its
//! distance from the anchor sets draw scale and color.

pub mod color;
pub mod error;
pub mod field;
mod gpu;
pub mod image_source;
pub mod input;
pub mod layout;
pub mod math;
pub mod particle;
mod shader;
mod simulation;
pub mod spawn;
pub mod time;

pub use color::{ColorLerp, ColorMap, Palette};
pub use error::{AppError, GpuError, ImageError};
pub use field::{ParticleField, CANVAS_SIZE};
pub use glam::{Vec2, Vec3};
pub use image_source::PixelBuffer;
pub use input::{Cursor, PointerInput, Viewport};
pub use layout::{LayoutConfig, Ring};
pub use particle::{Circle, Particle, ParticleParams};
pub use simulation::Simulation;
pub use spawn::SeedContext;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use ringfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{ColorLerp, ColorMap, Palette};
    pub use crate::error::{AppError, ImageError};
    pub use crate::field::{ParticleField, CANVAS_SIZE};
    pub use crate::image_source::PixelBuffer;
    pub use crate::input::Cursor;
    pub use crate::layout::LayoutConfig;
    pub use crate::particle::{Circle, Particle, ParticleParams};
    pub use crate::simulation::Simulation;
    pub use crate::spawn::SeedContext;
    pub use crate::{Vec2, Vec3};
}
