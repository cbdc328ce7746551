use std::borrow::Cow;
use std::sync::Arc;

use crate::render::{CustomDraw, UniformMerge};
use crate::scene::{Custom, CustomFragment, Placement, Renderable};

impl Renderable {
    /// Caller fragment program drawn on a unit square placed by the core.
    ///
    /// The core still builds the transform and applies the fixed blend mode;
    /// `merge` supplies the uniforms.
    pub fn custom_fragment(
        fragment: impl Into<Cow<'static, str>>,
        placement: Placement,
        merge: impl UniformMerge + 'static,
    ) -> Self {
        Renderable::CustomFragment(CustomFragment::new(
            placement.transform(),
            fragment.into(),
            Arc::new(merge),
        ))
    }

    /// Fully custom draw. The returned draw call is used as-is.
    pub fn custom(draw: impl CustomDraw + 'static) -> Self {
        Renderable::Custom(Custom::new(Arc::new(draw)))
    }
}
