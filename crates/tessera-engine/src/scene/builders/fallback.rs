use glam::Mat4;

use crate::paint::Rgb;
use crate::scene::{BasicShape, ColoredShape, Renderable, TextureHandle};

/// Color of the placeholder drawn in place of a texture that is not loaded yet.
pub const FALLBACK_COLOR: Rgb = Rgb::GRAY;

/// Builds the textured renderable, or a gray rectangle with the same transform
/// when `texture` is absent.
pub(super) fn textured_or_placeholder(
    texture: Option<TextureHandle>,
    transform: Mat4,
    build: impl FnOnce(TextureHandle) -> Renderable,
) -> Renderable {
    match texture {
        Some(texture) => build(texture),
        None => {
            log::debug!("texture not available; substituting placeholder rectangle");
            Renderable::ColoredShape(ColoredShape::new(
                BasicShape::Rectangle,
                transform,
                FALLBACK_COLOR.normalized(),
            ))
        }
    }
}
