//! Static unit meshes.
//!
//! Both meshes span `0..1` on each local axis, so the transform builder's scale
//! maps them directly to world size.

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Identifies one of the static meshes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MeshId {
    UnitSquare,
    UnitTriangle,
}

impl MeshId {
    #[inline]
    pub fn vertices(self) -> &'static [MeshVertex] {
        match self {
            MeshId::UnitSquare => &UNIT_SQUARE_VERTICES,
            MeshId::UnitTriangle => &UNIT_TRIANGLE_VERTICES,
        }
    }

    #[inline]
    pub fn indices(self) -> &'static [u16] {
        match self {
            MeshId::UnitSquare => &UNIT_SQUARE_INDICES,
            MeshId::UnitTriangle => &UNIT_TRIANGLE_INDICES,
        }
    }

    #[inline]
    pub fn index_count(self) -> u32 {
        self.indices().len() as u32
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub pos: [f32; 2], // 0..1
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

pub const UNIT_SQUARE_VERTICES: [MeshVertex; 4] = [
    MeshVertex { pos: [0.0, 0.0] },
    MeshVertex { pos: [1.0, 0.0] },
    MeshVertex { pos: [1.0, 1.0] },
    MeshVertex { pos: [0.0, 1.0] },
];

pub const UNIT_SQUARE_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

pub const UNIT_TRIANGLE_VERTICES: [MeshVertex; 3] = [
    MeshVertex { pos: [0.0, 0.0] },
    MeshVertex { pos: [1.0, 0.0] },
    MeshVertex { pos: [0.5, 1.0] },
];

pub const UNIT_TRIANGLE_INDICES: [u16; 3] = [0, 1, 2];

/// GPU copies of both unit meshes, uploaded once.
pub struct MeshBuffers {
    square_vbo: wgpu::Buffer,
    square_ibo: wgpu::Buffer,
    triangle_vbo: wgpu::Buffer,
    triangle_ibo: wgpu::Buffer,
}

/// Buffers and index count for one mesh.
#[derive(Debug, Copy, Clone)]
pub struct MeshSlice<'a> {
    pub vertices: &'a wgpu::Buffer,
    pub indices: &'a wgpu::Buffer,
    pub index_count: u32,
}

impl MeshBuffers {
    pub fn new(device: &wgpu::Device) -> Self {
        let upload_vertices = |label: &str, mesh: MeshId| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(mesh.vertices()),
                usage: wgpu::BufferUsages::VERTEX,
            })
        };
        let upload_indices = |label: &str, mesh: MeshId| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(mesh.indices()),
                usage: wgpu::BufferUsages::INDEX,
            })
        };

        log::debug!("uploading unit meshes");

        Self {
            square_vbo: upload_vertices("tessera unit square vbo", MeshId::UnitSquare),
            square_ibo: upload_indices("tessera unit square ibo", MeshId::UnitSquare),
            triangle_vbo: upload_vertices("tessera unit triangle vbo", MeshId::UnitTriangle),
            triangle_ibo: upload_indices("tessera unit triangle ibo", MeshId::UnitTriangle),
        }
    }

    pub fn get(&self, mesh: MeshId) -> MeshSlice<'_> {
        let (vertices, indices) = match mesh {
            MeshId::UnitSquare => (&self.square_vbo, &self.square_ibo),
            MeshId::UnitTriangle => (&self.triangle_vbo, &self.triangle_ibo),
        };
        MeshSlice { vertices, indices, index_count: mesh.index_count() }
    }
}

impl MeshSlice<'_> {
    /// Binds the mesh at vertex slot 0 and issues a single indexed draw.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertices.slice(..));
        rpass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..self.index_count, 0, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(mesh: MeshId) -> ([f32; 2], [f32; 2]) {
        let mut min = [f32::MAX; 2];
        let mut max = [f32::MIN; 2];
        for v in mesh.vertices() {
            for axis in 0..2 {
                min[axis] = min[axis].min(v.pos[axis]);
                max[axis] = max[axis].max(v.pos[axis]);
            }
        }
        (min, max)
    }

    #[test]
    fn meshes_span_unit_range() {
        for mesh in [MeshId::UnitSquare, MeshId::UnitTriangle] {
            assert_eq!(bounds(mesh), ([0.0, 0.0], [1.0, 1.0]), "{mesh:?}");
        }
    }

    #[test]
    fn indices_reference_existing_vertices() {
        for mesh in [MeshId::UnitSquare, MeshId::UnitTriangle] {
            let n = mesh.vertices().len() as u16;
            assert!(mesh.indices().iter().all(|&i| i < n), "{mesh:?}");
            assert_eq!(mesh.index_count() % 3, 0);
        }
    }

    #[test]
    fn triangles_wind_counter_clockwise() {
        for mesh in [MeshId::UnitSquare, MeshId::UnitTriangle] {
            let v = mesh.vertices();
            for tri in mesh.indices().chunks(3) {
                let [a, b, c] = [v[tri[0] as usize].pos, v[tri[1] as usize].pos, v[tri[2] as usize].pos];
                let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
                assert!(cross > 0.0, "{mesh:?} {tri:?}");
            }
        }
    }

    #[test]
    fn vertex_stride_matches_layout() {
        assert_eq!(MeshVertex::layout().array_stride, 8);
    }
}
