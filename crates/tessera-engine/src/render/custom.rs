//! Extension points for caller-defined drawing.

use glam::Mat4;

use super::{DrawCall, UniformSet};

/// Frame data handed to full custom draw functions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameContext {
    pub projection: Mat4,
    /// Seconds since the caller's time origin.
    pub elapsed: f32,
}

/// Full custom draw: produces the entire draw call.
///
/// Transform, mesh and blend mode are the implementor's responsibility; the
/// translator returns the result untouched. Use
/// [`transparent_blend`](super::transparent_blend) to match built-in compositing.
pub trait CustomDraw: Send + Sync {
    fn draw(&self, ctx: &FrameContext) -> DrawCall;
}

impl<F> CustomDraw for F
where
    F: Fn(&FrameContext) -> DrawCall + Send + Sync,
{
    #[inline]
    fn draw(&self, ctx: &FrameContext) -> DrawCall {
        self(ctx)
    }
}

/// Uniform producer for custom fragment programs.
///
/// The returned set must contain `camera_proj` and `transform` (see
/// [`names`](super::uniforms::names)); the translator fills in either one if it
/// is missing.
pub trait UniformMerge: Send + Sync {
    fn merge(&self, camera_proj: Mat4, elapsed: f32, transform: Mat4) -> UniformSet;
}

impl<F> UniformMerge for F
where
    F: Fn(Mat4, f32, Mat4) -> UniformSet + Send + Sync,
{
    #[inline]
    fn merge(&self, camera_proj: Mat4, elapsed: f32, transform: Mat4) -> UniformSet {
        self(camera_proj, elapsed, transform)
    }
}
