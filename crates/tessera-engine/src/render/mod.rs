//! Translation from renderables to draw-call descriptions.
//!
//! The translator is the single consumer of `scene` values. It never touches the
//! GPU: it picks a program pair, a mesh and a uniform set per renderable and
//! attaches the fixed blend configuration. Submission is the backend's job.
//!
//! Convention:
//! - meshes are the unit square / unit triangle (local 0..1)
//! - every built-in program receives `camera_proj` and `transform`
//! - uniform names live in [`uniforms::names`]

mod blend;
mod catalog;
mod custom;
mod draw_call;
mod programs;
mod translator;

pub mod animation;
pub mod mesh;
pub mod parallax;
pub mod uniforms;

pub use blend::{BlendConfig, TRANSPARENT_BLEND, transparent_blend};
pub use catalog::{CatalogEntry, lookup as catalog_entry};
pub use custom::{CustomDraw, FrameContext, UniformMerge};
pub use draw_call::DrawCall;
pub use mesh::{MeshBuffers, MeshId, MeshSlice, MeshVertex};
pub use programs::{Effect, ProgramPair, ProgramTable};
pub use translator::{FrameInputs, Translator};
pub use uniforms::{UniformError, UniformSet, UniformValue};
