//! Builder entry points, one module per renderable family.
//!
//! Each family follows the same three tiers:
//! - basic: 2D position, depth 0, no rotation, pivot on the origin corner
//! - `_z`: explicit 3-axis position
//! - `_with_options`: every parameter
//!
//! Only the `_with_options` form holds logic; the other tiers fill defaults and delegate.

mod animated;
mod custom;
mod fallback;
mod parallax;
mod shape;
mod sprite;

pub use animated::AnimatedSpriteOptions;
pub use fallback::FALLBACK_COLOR;
pub use parallax::ParallaxOptions;
pub use shape::ShapeOptions;
pub use sprite::SpriteOptions;
