use glam::{Mat4, Vec2, Vec3};

use crate::scene::{ParallaxScroll, Placement, Renderable, TextureHandle};

use super::fallback::textured_or_placeholder;

/// Every parameter of a parallax layer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParallaxOptions {
    pub texture: Option<TextureHandle>,
    /// Per-axis multiplier on camera motion.
    pub scroll_speed: Vec2,
    /// World-space size of one texture tile.
    pub tile_size: Vec2,
    /// Depth of the layer; does not affect placement.
    pub depth: f32,
    /// World-space phase shift of the tiling, independent of the camera.
    pub offset: Vec2,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self {
            texture: None,
            scroll_speed: Vec2::ONE,
            tile_size: Vec2::ONE,
            depth: 0.0,
            offset: Vec2::ZERO,
        }
    }
}

/// Placeholder transform of a parallax layer: the unit square at `(0, 0, depth)`.
///
/// Textured layers get their view-covering transform at translation time.
fn layer_transform(depth: f32) -> Mat4 {
    Placement::new_z(Vec3::new(0.0, 0.0, depth), Vec2::ONE).transform()
}

impl Renderable {
    /// Parallax layer at depth 0 with no phase offset.
    #[inline]
    pub fn parallax_scroll(texture: Option<TextureHandle>, scroll_speed: Vec2, tile_size: Vec2) -> Self {
        Self::parallax_scroll_with_options(ParallaxOptions {
            texture,
            scroll_speed,
            tile_size,
            ..ParallaxOptions::default()
        })
    }

    /// Parallax layer at the given depth with no phase offset.
    #[inline]
    pub fn parallax_scroll_z(
        texture: Option<TextureHandle>,
        scroll_speed: Vec2,
        tile_size: Vec2,
        depth: f32,
    ) -> Self {
        Self::parallax_scroll_with_options(ParallaxOptions {
            texture,
            scroll_speed,
            tile_size,
            depth,
            ..ParallaxOptions::default()
        })
    }

    pub fn parallax_scroll_with_options(options: ParallaxOptions) -> Self {
        textured_or_placeholder(options.texture, layer_transform(options.depth), |texture| {
            Renderable::ParallaxScroll(ParallaxScroll::new(
                texture,
                options.tile_size,
                options.scroll_speed,
                options.depth,
                options.offset,
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{BasicShape, FALLBACK_COLOR, RenderableKind};

    const SKY: TextureHandle = TextureHandle::new(11);

    #[test]
    fn stores_parameters() {
        let r = Renderable::parallax_scroll_with_options(ParallaxOptions {
            texture: Some(SKY),
            scroll_speed: Vec2::new(0.25, 0.0),
            tile_size: Vec2::new(16.0, 9.0),
            depth: -5.0,
            offset: Vec2::new(3.0, 1.0),
        });
        let Renderable::ParallaxScroll(p) = &r else { panic!("expected ParallaxScroll, got {r:?}") };
        assert_eq!(p.texture(), SKY);
        assert_eq!(p.scroll_speed(), Vec2::new(0.25, 0.0));
        assert_eq!(p.tile_size(), Vec2::new(16.0, 9.0));
        assert_eq!(p.depth(), -5.0);
        assert_eq!(p.offset(), Vec2::new(3.0, 1.0));
        assert_eq!(r.transform(), None);
    }

    #[test]
    fn absent_texture_is_unit_rect_at_depth() {
        let d = 2.5;
        let r = Renderable::parallax_scroll_with_options(ParallaxOptions { depth: d, ..ParallaxOptions::default() });
        let Renderable::ColoredShape(s) = &r else { panic!("expected ColoredShape, got {r:?}") };
        assert_eq!(s.shape(), BasicShape::Rectangle);
        assert_eq!(s.color(), FALLBACK_COLOR.normalized());

        let m = s.transform();
        assert!(m.transform_point3(Vec3::ZERO).abs_diff_eq(Vec3::new(0.0, 0.0, d), 1e-6));
        assert!(m.transform_point3(Vec3::new(1.0, 1.0, 0.0)).abs_diff_eq(Vec3::new(1.0, 1.0, d), 1e-6));
    }

    #[test]
    fn tiers_agree() {
        let a = Renderable::parallax_scroll(Some(SKY), Vec2::splat(0.5), Vec2::splat(4.0));
        let b = Renderable::parallax_scroll_z(Some(SKY), Vec2::splat(0.5), Vec2::splat(4.0), 0.0);
        let (Renderable::ParallaxScroll(a), Renderable::ParallaxScroll(b)) = (&a, &b) else {
            panic!("expected two ParallaxScroll values");
        };
        assert_eq!(a, b);
        assert_eq!(Renderable::parallax_scroll(None, Vec2::ONE, Vec2::ONE).kind(), RenderableKind::ColoredShape);
    }
}
