use glam::{Vec2, Vec3};

use crate::scene::{AnimatedSprite, Placement, Renderable, TextureHandle};

use super::fallback::textured_or_placeholder;

/// Every parameter of an animated sprite.
///
/// `frame_count >= 1` and `frame_duration > 0` are the caller's responsibility.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimatedSpriteOptions {
    pub texture: Option<TextureHandle>,
    pub placement: Placement,
    /// Bottom-left corner of the frame strip in normalized texture coordinates.
    pub uv_bottom_left: Vec2,
    /// Top-right corner of the frame strip in normalized texture coordinates.
    pub uv_top_right: Vec2,
    pub frame_count: u32,
    /// Seconds per frame.
    pub frame_duration: f32,
}

impl Default for AnimatedSpriteOptions {
    fn default() -> Self {
        Self {
            texture: None,
            placement: Placement::default(),
            uv_bottom_left: Vec2::ZERO,
            uv_top_right: Vec2::ONE,
            frame_count: 1,
            frame_duration: 1.0,
        }
    }
}

impl Renderable {
    /// Animated sprite over the whole texture, at depth 0.
    #[inline]
    pub fn animated_sprite(
        texture: Option<TextureHandle>,
        position: Vec2,
        size: Vec2,
        frame_count: u32,
        frame_duration: f32,
    ) -> Self {
        Self::animated_sprite_with_options(AnimatedSpriteOptions {
            texture,
            placement: Placement::new(position, size),
            frame_count,
            frame_duration,
            ..AnimatedSpriteOptions::default()
        })
    }

    /// Animated sprite over the whole texture, with explicit depth.
    #[inline]
    pub fn animated_sprite_z(
        texture: Option<TextureHandle>,
        position: Vec3,
        size: Vec2,
        frame_count: u32,
        frame_duration: f32,
    ) -> Self {
        Self::animated_sprite_with_options(AnimatedSpriteOptions {
            texture,
            placement: Placement::new_z(position, size),
            frame_count,
            frame_duration,
            ..AnimatedSpriteOptions::default()
        })
    }

    pub fn animated_sprite_with_options(options: AnimatedSpriteOptions) -> Self {
        let transform = options.placement.transform();
        textured_or_placeholder(options.texture, transform, |texture| {
            Renderable::AnimatedSprite(AnimatedSprite::new(
                transform,
                texture,
                options.uv_bottom_left,
                options.uv_top_right,
                options.frame_duration,
                options.frame_count,
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{BasicShape, FALLBACK_COLOR};

    const SHEET: TextureHandle = TextureHandle::new(3);

    #[test]
    fn preserves_frame_params() {
        let r = Renderable::animated_sprite(Some(SHEET), Vec2::ZERO, Vec2::ONE, 8, 0.125);
        let Renderable::AnimatedSprite(a) = &r else { panic!("expected AnimatedSprite, got {r:?}") };
        assert_eq!(a.frame_count(), 8);
        assert_eq!(a.frame_duration(), 0.125);
        assert_eq!(a.texture(), SHEET);
        assert_eq!(a.uv_bottom_left(), Vec2::ZERO);
        assert_eq!(a.uv_top_right(), Vec2::ONE);
    }

    #[test]
    fn uv_rect_is_not_clamped() {
        let r = Renderable::animated_sprite_with_options(AnimatedSpriteOptions {
            texture: Some(SHEET),
            uv_bottom_left: Vec2::new(-0.5, 0.25),
            uv_top_right: Vec2::new(1.5, 0.5),
            frame_count: 4,
            frame_duration: 0.1,
            ..AnimatedSpriteOptions::default()
        });
        let Renderable::AnimatedSprite(a) = &r else { panic!("expected AnimatedSprite") };
        assert_eq!(a.uv_bottom_left(), Vec2::new(-0.5, 0.25));
        assert_eq!(a.uv_top_right(), Vec2::new(1.5, 0.5));
    }

    #[test]
    fn degenerate_params_are_accepted() {
        let r = Renderable::animated_sprite(Some(SHEET), Vec2::ZERO, Vec2::ONE, 0, 0.0);
        let Renderable::AnimatedSprite(a) = &r else { panic!("expected AnimatedSprite") };
        assert_eq!(a.frame_count(), 0);
        assert_eq!(a.frame_duration(), 0.0);
    }

    #[test]
    fn absent_texture_falls_back() {
        let r = Renderable::animated_sprite_z(None, Vec3::new(1.0, 2.0, 3.0), Vec2::new(2.0, 2.0), 4, 0.2);
        let Renderable::ColoredShape(s) = &r else { panic!("expected ColoredShape, got {r:?}") };
        assert_eq!(s.shape(), BasicShape::Rectangle);
        assert_eq!(s.color(), FALLBACK_COLOR.normalized());
        assert_eq!(s.transform(), Placement::new_z(Vec3::new(1.0, 2.0, 3.0), Vec2::new(2.0, 2.0)).transform());
    }
}
