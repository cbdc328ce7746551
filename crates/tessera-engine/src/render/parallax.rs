//! Parallax layer parameterization.
//!
//! Layers store only their own parameters. Camera position and world-space view
//! size are read at translation time and packaged next to them, together with
//! the derived tiling the textured program needs.
//!
//! A layer is drawn as the unit square stretched over the camera's view
//! rectangle, so the shared textured program covers the viewport without a
//! dedicated vertex stage.

use glam::{Mat4, Vec2};

use crate::scene::{ParallaxScroll, build_transform};

use super::UniformSet;
use super::uniforms::names;

/// Offset into the tiled texture, in tiles.
///
/// Moves with `camera_position * scroll_speed` so layers with smaller speeds
/// appear further away; `offset` shifts the phase independently of the camera.
#[inline]
pub fn uv_offset(camera_position: Vec2, scroll_speed: Vec2, offset: Vec2, tile_size: Vec2) -> Vec2 {
    (camera_position * scroll_speed + offset) / tile_size
}

/// Number of tiles visible across the view on each axis.
#[inline]
pub fn tile_repeat(view_size: Vec2, tile_size: Vec2) -> Vec2 {
    view_size / tile_size
}

/// Transform stretching the unit square over the view rectangle centered on
/// `camera_position`, at `depth`.
#[inline]
pub fn view_transform(camera_position: Vec2, view_size: Vec2, depth: f32) -> Mat4 {
    let bottom_left = camera_position - view_size * 0.5;
    build_transform(bottom_left.extend(depth), 0.0, view_size, Vec2::ZERO)
}

/// Full uniform set for one parallax layer.
pub(crate) fn parallax_uniforms(
    layer: &ParallaxScroll,
    camera_position: Vec2,
    view_size: Vec2,
    projection: Mat4,
) -> UniformSet {
    UniformSet::with_capacity(12)
        .with(names::CAMERA_PROJ, projection)
        .with(names::TRANSFORM, view_transform(camera_position, view_size, layer.depth()))
        .with(names::TEXTURE, layer.texture())
        .with(
            names::UV_OFFSET,
            uv_offset(camera_position, layer.scroll_speed(), layer.offset(), layer.tile_size()),
        )
        .with(names::TILE_REPEAT, tile_repeat(view_size, layer.tile_size()))
        .with(names::CAMERA_POSITION, camera_position)
        .with(names::VIEW_SIZE, view_size)
        .with(names::SCROLL_SPEED, layer.scroll_speed())
        .with(names::TILE_SIZE, layer.tile_size())
        .with(names::OFFSET, layer.offset())
        .with(names::DEPTH, layer.depth())
}
