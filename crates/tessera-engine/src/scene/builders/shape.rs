use glam::{Vec2, Vec3};

use crate::paint::Rgb;
use crate::scene::{BasicShape, ColoredShape, Placement, Renderable};

/// Every parameter of a colored shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShapeOptions {
    pub placement: Placement,
    pub color: Rgb,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self { placement: Placement::default(), color: Rgb::WHITE }
    }
}

impl Renderable {
    /// Flat-colored shape at depth 0.
    #[inline]
    pub fn shape(shape: BasicShape, position: Vec2, size: Vec2, color: Rgb) -> Self {
        Self::shape_with_options(shape, ShapeOptions { placement: Placement::new(position, size), color })
    }

    /// Flat-colored shape with explicit depth.
    #[inline]
    pub fn shape_z(shape: BasicShape, position: Vec3, size: Vec2, color: Rgb) -> Self {
        Self::shape_with_options(shape, ShapeOptions { placement: Placement::new_z(position, size), color })
    }

    pub fn shape_with_options(shape: BasicShape, options: ShapeOptions) -> Self {
        Renderable::ColoredShape(ColoredShape::new(
            shape,
            options.placement.transform(),
            options.color.normalized(),
        ))
    }
}
