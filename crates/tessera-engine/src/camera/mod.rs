//! Camera contract consumed by the translator.
//!
//! The translator only needs the camera's world position and how much of the
//! world a pixel viewport shows. Projection matrices are supplied separately
//! by the caller, so any camera model works as long as it implements [`Camera`].

mod ortho;

use glam::Vec2;

use crate::coords::Viewport;

pub use ortho::{DEPTH_RANGE, OrthoCamera};

pub trait Camera {
    /// Current world position.
    fn position(&self) -> Vec2;

    /// World-space size visible through `viewport`.
    fn view_size(&self, viewport: Viewport) -> Vec2;
}
