use glam::{Vec2, Vec3};

use crate::scene::{Placement, Renderable, TextureHandle, TexturedRectangle};

use super::fallback::textured_or_placeholder;

/// Every parameter of a static sprite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteOptions {
    /// `None` while the texture is still loading; a gray placeholder is drawn instead.
    pub texture: Option<TextureHandle>,
    pub placement: Placement,
    /// Texture repeats across the rectangle per axis. `(1, 1)` stretches it once.
    pub tile_repeat: Vec2,
}

impl Default for SpriteOptions {
    fn default() -> Self {
        Self { texture: None, placement: Placement::default(), tile_repeat: Vec2::ONE }
    }
}

impl Renderable {
    /// Untiled sprite at depth 0.
    #[inline]
    pub fn sprite(texture: Option<TextureHandle>, position: Vec2, size: Vec2) -> Self {
        Self::sprite_with_options(SpriteOptions {
            texture,
            placement: Placement::new(position, size),
            ..SpriteOptions::default()
        })
    }

    /// Untiled sprite with explicit depth.
    #[inline]
    pub fn sprite_z(texture: Option<TextureHandle>, position: Vec3, size: Vec2) -> Self {
        Self::sprite_with_options(SpriteOptions {
            texture,
            placement: Placement::new_z(position, size),
            ..SpriteOptions::default()
        })
    }

    pub fn sprite_with_options(options: SpriteOptions) -> Self {
        let transform = options.placement.transform();
        textured_or_placeholder(options.texture, transform, |texture| {
            Renderable::TexturedRectangle(TexturedRectangle::new(transform, texture, options.tile_repeat))
        })
    }
}
