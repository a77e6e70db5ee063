use crate::core::vertex::Vertex;
use crate::render::atlas::UvRect;

/// CPU-side triangle buffers for one chunk, ready for upload by the
/// rendering layer. Two triangles per quad, indices into `vertices`.
#[derive(Clone, Debug, Default)]
pub struct ChunkMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl ChunkMesh {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn face_count(&self) -> usize {
        self.indices.len() / 6
    }
}

/// Append one quad as two triangles. Vertices arrive in winding order;
/// the UV corners follow the same order so texture orientation matches on
/// every face direction.
pub fn add_quad(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    v0: [f32; 3],
    v1: [f32; 3],
    v2: [f32; 3],
    v3: [f32; 3],
    normal: [f32; 3],
    color: [f32; 3],
    uv: UvRect,
) {
    let base_idx = vertices.len() as u32;
    vertices.push(Vertex {
        position: v0,
        normal,
        color,
        uv: [uv.u0, uv.v1],
    });
    vertices.push(Vertex {
        position: v1,
        normal,
        color,
        uv: [uv.u1, uv.v1],
    });
    vertices.push(Vertex {
        position: v2,
        normal,
        color,
        uv: [uv.u1, uv.v0],
    });
    vertices.push(Vertex {
        position: v3,
        normal,
        color,
        uv: [uv.u0, uv.v0],
    });
    indices.extend_from_slice(&[
        base_idx,
        base_idx + 1,
        base_idx + 2,
        base_idx,
        base_idx + 2,
        base_idx + 3,
    ]);
}
