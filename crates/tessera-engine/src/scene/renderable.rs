use core::fmt;
use std::borrow::Cow;
use std::sync::Arc;

use glam::{Mat4, Vec2, Vec3};

use crate::render::{CustomDraw, UniformMerge};

use super::{BasicShape, TextureHandle};

/// A description of one thing to draw.
///
/// Values are produced by the builders in [`scene::builders`](super::builders)
/// and consumed by the translator, which turns each one into exactly one draw
/// call. They are immutable; cloning is cheap (custom functions are shared).
///
/// Payload fields are private so that every transform is the output of the
/// transform builder and no texture-bearing variant can exist without a texture.
#[derive(Debug, Clone)]
pub enum Renderable {
    ColoredShape(ColoredShape),
    TexturedRectangle(TexturedRectangle),
    AnimatedSprite(AnimatedSprite),
    ParallaxScroll(ParallaxScroll),
    CustomFragment(CustomFragment),
    Custom(Custom),
}

/// Variant tag of a [`Renderable`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RenderableKind {
    ColoredShape,
    TexturedRectangle,
    AnimatedSprite,
    ParallaxScroll,
    CustomFragment,
    Custom,
}

impl Renderable {
    pub fn kind(&self) -> RenderableKind {
        match self {
            Renderable::ColoredShape(_) => RenderableKind::ColoredShape,
            Renderable::TexturedRectangle(_) => RenderableKind::TexturedRectangle,
            Renderable::AnimatedSprite(_) => RenderableKind::AnimatedSprite,
            Renderable::ParallaxScroll(_) => RenderableKind::ParallaxScroll,
            Renderable::CustomFragment(_) => RenderableKind::CustomFragment,
            Renderable::Custom(_) => RenderableKind::Custom,
        }
    }

    /// World transform, for every variant that carries one.
    ///
    /// Parallax layers compute theirs at translation time; custom draws own theirs.
    pub fn transform(&self) -> Option<Mat4> {
        match self {
            Renderable::ColoredShape(s) => Some(s.transform),
            Renderable::TexturedRectangle(t) => Some(t.transform),
            Renderable::AnimatedSprite(a) => Some(a.transform),
            Renderable::CustomFragment(c) => Some(c.transform),
            Renderable::ParallaxScroll(_) | Renderable::Custom(_) => None,
        }
    }
}

// ── colored shape ─────────────────────────────────────────────────────────

/// Flat-colored basic shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColoredShape {
    shape: BasicShape,
    transform: Mat4,
    color: Vec3,
}

impl ColoredShape {
    #[inline]
    pub(crate) fn new(shape: BasicShape, transform: Mat4, color: Vec3) -> Self {
        Self { shape, transform, color }
    }

    #[inline]
    pub fn shape(&self) -> BasicShape {
        self.shape
    }

    #[inline]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Normalized `0..1` RGB.
    #[inline]
    pub fn color(&self) -> Vec3 {
        self.color
    }
}

// ── textured rectangle ────────────────────────────────────────────────────

/// Static sprite, optionally tiled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TexturedRectangle {
    transform: Mat4,
    texture: TextureHandle,
    tile_repeat: Vec2,
}

impl TexturedRectangle {
    #[inline]
    pub(crate) fn new(transform: Mat4, texture: TextureHandle, tile_repeat: Vec2) -> Self {
        Self { transform, texture, tile_repeat }
    }

    #[inline]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    #[inline]
    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// How many times the texture repeats across the rectangle on each axis.
    #[inline]
    pub fn tile_repeat(&self) -> Vec2 {
        self.tile_repeat
    }
}

// ── animated sprite ───────────────────────────────────────────────────────

/// Looping sprite-sheet animation.
///
/// The frame strip is `[uv_bottom_left, uv_top_right]` split into `frame_count`
/// equal horizontal cells; see [`render::animation`](crate::render::animation).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimatedSprite {
    transform: Mat4,
    texture: TextureHandle,
    uv_bottom_left: Vec2,
    uv_top_right: Vec2,
    frame_duration: f32,
    frame_count: u32,
}

impl AnimatedSprite {
    #[inline]
    pub(crate) fn new(
        transform: Mat4,
        texture: TextureHandle,
        uv_bottom_left: Vec2,
        uv_top_right: Vec2,
        frame_duration: f32,
        frame_count: u32,
    ) -> Self {
        Self { transform, texture, uv_bottom_left, uv_top_right, frame_duration, frame_count }
    }

    #[inline]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    #[inline]
    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    #[inline]
    pub fn uv_bottom_left(&self) -> Vec2 {
        self.uv_bottom_left
    }

    #[inline]
    pub fn uv_top_right(&self) -> Vec2 {
        self.uv_top_right
    }

    /// Seconds per frame.
    #[inline]
    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }

    #[inline]
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }
}

// ── parallax scroll ───────────────────────────────────────────────────────

/// Full-viewport tiled background layer that scrolls with the camera.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParallaxScroll {
    texture: TextureHandle,
    tile_size: Vec2,
    scroll_speed: Vec2,
    depth: f32,
    offset: Vec2,
}

impl ParallaxScroll {
    #[inline]
    pub(crate) fn new(
        texture: TextureHandle,
        tile_size: Vec2,
        scroll_speed: Vec2,
        depth: f32,
        offset: Vec2,
    ) -> Self {
        Self { texture, tile_size, scroll_speed, depth, offset }
    }

    #[inline]
    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// World-space size of one texture tile.
    #[inline]
    pub fn tile_size(&self) -> Vec2 {
        self.tile_size
    }

    /// Per-axis multiplier on camera motion; `0` pins the layer, `1` tracks the world.
    #[inline]
    pub fn scroll_speed(&self) -> Vec2 {
        self.scroll_speed
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// World-space phase shift of the tiling.
    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}

// ── custom fragment ───────────────────────────────────────────────────────

/// Caller-supplied fragment program on a core-placed unit square.
#[derive(Clone)]
pub struct CustomFragment {
    transform: Mat4,
    fragment: Cow<'static, str>,
    merge: Arc<dyn UniformMerge>,
}

impl CustomFragment {
    #[inline]
    pub(crate) fn new(transform: Mat4, fragment: Cow<'static, str>, merge: Arc<dyn UniformMerge>) -> Self {
        Self { transform, fragment, merge }
    }

    #[inline]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Fragment program name.
    #[inline]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    #[inline]
    pub(crate) fn fragment_name(&self) -> Cow<'static, str> {
        self.fragment.clone()
    }

    #[inline]
    pub fn merge(&self) -> &dyn UniformMerge {
        self.merge.as_ref()
    }
}

impl fmt::Debug for CustomFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomFragment")
            .field("transform", &self.transform)
            .field("fragment", &self.fragment)
            .finish_non_exhaustive()
    }
}

// ── custom ────────────────────────────────────────────────────────────────

/// Opaque caller draw function. The core does no processing at all.
#[derive(Clone)]
pub struct Custom {
    draw: Arc<dyn CustomDraw>,
}

impl Custom {
    #[inline]
    pub(crate) fn new(draw: Arc<dyn CustomDraw>) -> Self {
        Self { draw }
    }

    #[inline]
    pub fn draw_fn(&self) -> &dyn CustomDraw {
        self.draw.as_ref()
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom").finish_non_exhaustive()
    }
}
