//! Renderable descriptions.
//!
//! Responsibilities:
//! - the closed set of things the facade can draw (`Renderable`)
//! - the single transform builder every placement goes through
//! - builder entry points per renderable family, including the missing-texture fallback
//!
//! Extending the scene:
//! - add a payload type and a variant in `renderable`
//! - add builders under `scene::builders::*`
//! - handle the variant in `render::translator` (the `match` there is exhaustive)

mod placement;
mod renderable;
mod shape;
mod texture;
mod transform;

pub mod builders;

pub use builders::{
    AnimatedSpriteOptions, FALLBACK_COLOR, ParallaxOptions, ShapeOptions, SpriteOptions,
};
pub use placement::Placement;
pub use renderable::{
    AnimatedSprite, ColoredShape, Custom, CustomFragment, ParallaxScroll, Renderable,
    RenderableKind, TexturedRectangle,
};
pub use shape::BasicShape;
pub use texture::TextureHandle;
pub use transform::build_transform;
