use glam::{Mat4, Vec2};

use crate::camera::Camera;
use crate::coords::Viewport;
use crate::scene::{
    AnimatedSprite, ColoredShape, CustomFragment, ParallaxScroll, Renderable, TexturedRectangle,
};

use super::catalog;
use super::parallax::parallax_uniforms;
use super::uniforms::names;
use super::{DrawCall, Effect, FrameContext, MeshId, ProgramTable, TRANSPARENT_BLEND, UniformSet};

/// Per-frame inputs shared by every translation in a frame.
#[derive(Copy, Clone)]
pub struct FrameInputs<'a> {
    /// Seconds since the caller's time origin.
    pub elapsed: f32,
    pub camera: &'a dyn Camera,
    /// Viewport size in pixels.
    pub viewport: Viewport,
    pub projection: Mat4,
}

/// Turns renderables into draw calls.
///
/// Each call is independent and side-effect free apart from log output; the
/// translator holds nothing but its program table. Every built-in path applies
/// [`TRANSPARENT_BLEND`]; only [`Renderable::Custom`] bypasses it.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    programs: ProgramTable,
}

impl Translator {
    pub fn new(programs: ProgramTable) -> Self {
        Self { programs }
    }

    #[inline]
    pub fn programs(&self) -> &ProgramTable {
        &self.programs
    }

    /// Produces the draw call for one renderable.
    pub fn translate(
        &self,
        renderable: &Renderable,
        elapsed: f32,
        camera: &dyn Camera,
        viewport: Viewport,
        projection: Mat4,
    ) -> DrawCall {
        log::trace!("translating {:?}", renderable.kind());
        match renderable {
            Renderable::ColoredShape(s) => self.colored_shape(s, projection),
            Renderable::TexturedRectangle(t) => self.textured_rectangle(t, projection),
            Renderable::AnimatedSprite(a) => self.animated_sprite(a, elapsed, projection),
            Renderable::ParallaxScroll(p) => self.parallax_scroll(p, camera, viewport, projection),
            Renderable::CustomFragment(c) => self.custom_fragment(c, elapsed, projection),
            Renderable::Custom(c) => c.draw_fn().draw(&FrameContext { projection, elapsed }),
        }
    }

    /// Translates `renderables` in order, one draw call each.
    pub fn translate_frame<'a>(
        &'a self,
        renderables: &'a [Renderable],
        frame: FrameInputs<'a>,
    ) -> impl Iterator<Item = DrawCall> + 'a {
        renderables.iter().map(move |r| {
            self.translate(r, frame.elapsed, frame.camera, frame.viewport, frame.projection)
        })
    }

    fn colored_shape(&self, s: &ColoredShape, projection: Mat4) -> DrawCall {
        let entry = catalog::lookup(s.shape());
        let uniforms = UniformSet::with_capacity(3)
            .with(names::CAMERA_PROJ, projection)
            .with(names::TRANSFORM, s.transform())
            .with(names::COLOR, s.color());
        self.builtin(entry.effect, entry.mesh, uniforms)
    }

    fn textured_rectangle(&self, t: &TexturedRectangle, projection: Mat4) -> DrawCall {
        let uniforms = UniformSet::with_capacity(5)
            .with(names::CAMERA_PROJ, projection)
            .with(names::TRANSFORM, t.transform())
            .with(names::TEXTURE, t.texture())
            .with(names::TILE_REPEAT, t.tile_repeat())
            .with(names::UV_OFFSET, Vec2::ZERO);
        self.builtin(Effect::Textured, MeshId::UnitSquare, uniforms)
    }

    fn animated_sprite(&self, a: &AnimatedSprite, elapsed: f32, projection: Mat4) -> DrawCall {
        let uniforms = UniformSet::with_capacity(8)
            .with(names::CAMERA_PROJ, projection)
            .with(names::TRANSFORM, a.transform())
            .with(names::TEXTURE, a.texture())
            .with(names::UV_BOTTOM_LEFT, a.uv_bottom_left())
            .with(names::UV_TOP_RIGHT, a.uv_top_right())
            .with(names::FRAME_COUNT, a.frame_count())
            .with(names::FRAME_DURATION, a.frame_duration())
            .with(names::TIME, elapsed);
        self.builtin(Effect::AnimatedTextured, MeshId::UnitSquare, uniforms)
    }

    fn parallax_scroll(
        &self,
        p: &ParallaxScroll,
        camera: &dyn Camera,
        viewport: Viewport,
        projection: Mat4,
    ) -> DrawCall {
        let uniforms = parallax_uniforms(p, camera.position(), camera.view_size(viewport), projection);
        self.builtin(Effect::Textured, MeshId::UnitSquare, uniforms)
    }

    fn custom_fragment(&self, c: &CustomFragment, elapsed: f32, projection: Mat4) -> DrawCall {
        let mut uniforms = c.merge().merge(projection, elapsed, c.transform());

        let missing_proj = !uniforms.contains(names::CAMERA_PROJ);
        let missing_transform = !uniforms.contains(names::TRANSFORM);
        if missing_proj || missing_transform {
            log::debug!(
                "custom fragment {:?}: merged uniforms lack camera_proj/transform; filling them in",
                c.fragment()
            );
            if missing_proj {
                uniforms.set(names::CAMERA_PROJ, projection);
            }
            if missing_transform {
                uniforms.set(names::TRANSFORM, c.transform());
            }
        }

        DrawCall::new(
            self.programs.custom(c.fragment_name()),
            MeshId::UnitSquare,
            uniforms,
            TRANSPARENT_BLEND,
        )
    }

    fn builtin(&self, effect: Effect, mesh: MeshId, uniforms: UniformSet) -> DrawCall {
        DrawCall::new(self.programs.get(effect).clone(), mesh, uniforms, TRANSPARENT_BLEND)
    }
}
