//! Coordinate and geometry types shared across the scene model and translator.
//!
//! Canonical CPU space:
//! - World units (camera-relative placement is the projection's job)
//! - Origin bottom-left of the unit meshes
//! - +X right, +Y up
//! - Z only carries depth ordering, never 2D placement
//!
//! Vectors and matrices come from `glam`; this module only adds the pixel
//! viewport, which is not a world-space quantity.

mod viewport;

pub use glam::{Mat4, Vec2, Vec3, Vec4};
pub use viewport::Viewport;
