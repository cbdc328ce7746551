use glam::{Mat4, Vec2, Vec3};

use super::build_transform;

/// Where and how a unit mesh is placed in the world.
///
/// Only ever consumed through [`transform`](Self::transform); renderables store
/// the resulting matrix, never the placement itself.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    /// Pivot position in world units; `z` is depth only.
    pub position: Vec3,
    pub size: Vec2,
    /// Radians, counter-clockwise, about the pivot.
    pub rotation: f32,
    /// Normalized point within the shape: `(0, 0)` origin corner, `(0.5, 0.5)` center.
    pub pivot: Vec2,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            size: Vec2::ONE,
            rotation: 0.0,
            pivot: Vec2::ZERO,
        }
    }
}

impl Placement {
    /// Unrotated placement at depth 0, pivot on the origin corner.
    #[inline]
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self::new_z(position.extend(0.0), size)
    }

    /// Unrotated placement with explicit depth, pivot on the origin corner.
    #[inline]
    pub fn new_z(position: Vec3, size: Vec2) -> Self {
        Self { position, size, ..Self::default() }
    }

    #[inline]
    pub fn with_rotation(self, rotation: f32) -> Self {
        Self { rotation, ..self }
    }

    #[inline]
    pub fn with_pivot(self, pivot: Vec2) -> Self {
        Self { pivot, ..self }
    }

    #[inline]
    pub fn transform(&self) -> Mat4 {
        build_transform(self.position, self.rotation, self.size, self.pivot)
    }
}
