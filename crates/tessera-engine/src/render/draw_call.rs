use super::{BlendConfig, MeshId, ProgramPair, UniformSet};

/// Complete description of one GPU draw.
///
/// Produced by the translator (or a custom draw function) and consumed by the
/// GPU submission layer, which resolves `program` and `mesh` against its
/// libraries, uploads `uniforms` and configures blending from `blend`.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub program: ProgramPair,
    pub mesh: MeshId,
    pub uniforms: UniformSet,
    pub blend: BlendConfig,
}

impl DrawCall {
    #[inline]
    pub fn new(program: ProgramPair, mesh: MeshId, uniforms: UniformSet, blend: BlendConfig) -> Self {
        Self { program, mesh, uniforms, blend }
    }
}
