//! Face-culled chunk meshing.
//!
//! One quad per cube face whose neighboring cell is Air; interior faces
//! between two solid cells are never emitted, so triangle count tracks
//! surface area instead of volume. Neighbor cells outside the chunk are
//! resolved through an injected callback so boundary faces cull correctly
//! across chunks, and so the mesher stays testable against a synthetic
//! neighbor function.

use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::chunk::Chunk;
use crate::render::atlas::{TextureAtlas, UvRect};
use crate::render::mesh::{ChunkMesh, add_quad};
use crate::world::interactive::InteractiveBlocks;

struct Face {
    dir: [i32; 3],
    corners: [[i32; 3]; 4],
}

const FACES: [Face; 6] = [
    Face {
        dir: [1, 0, 0],
        corners: [[1, 0, 0], [1, 1, 0], [1, 1, 1], [1, 0, 1]],
    },
    Face {
        dir: [-1, 0, 0],
        corners: [[0, 0, 1], [0, 1, 1], [0, 1, 0], [0, 0, 0]],
    },
    Face {
        dir: [0, 1, 0],
        corners: [[0, 1, 0], [0, 1, 1], [1, 1, 1], [1, 1, 0]],
    },
    Face {
        dir: [0, -1, 0],
        corners: [[0, 0, 1], [0, 0, 0], [1, 0, 0], [1, 0, 1]],
    },
    Face {
        dir: [0, 0, 1],
        corners: [[0, 0, 1], [1, 0, 1], [1, 1, 1], [0, 1, 1]],
    },
    Face {
        dir: [0, 0, -1],
        corners: [[1, 0, 0], [0, 0, 0], [0, 1, 0], [1, 1, 0]],
    },
];

/// Build the triangle mesh for one chunk. Vertex positions are local to the
/// chunk; the rendering layer offsets the whole mesh by the chunk origin.
///
/// `neighbor_block` receives local coordinates that overflow [0, CHUNK_SIZE)
/// and must resolve them through the owning world. `interactive` supplies
/// door state; an open airlock door is emitted as a thin slab with all six
/// faces regardless of its neighbors. Without `atlas` every face maps the
/// full texture.
pub fn build_chunk_mesh<F>(
    chunk: &Chunk,
    chunk_pos: (i32, i32, i32),
    neighbor_block: F,
    interactive: Option<&InteractiveBlocks>,
    atlas: Option<&TextureAtlas>,
) -> ChunkMesh
where
    F: Fn(i32, i32, i32) -> BlockType,
{
    let mut mesh = ChunkMesh::default();

    for z in 0..CHUNK_SIZE {
        for y in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let block = chunk.get(x, y, z);
                if block == BlockType::Air {
                    continue;
                }

                let color = block.color();
                let uv = match atlas {
                    Some(atlas) => atlas.uv_rect(block),
                    None => UvRect::FULL,
                };
                let base = [x as f32, y as f32, z as f32];

                if block == BlockType::AirlockDoor {
                    let wx = chunk_pos.0 * CHUNK_SIZE + x;
                    let wy = chunk_pos.1 * CHUNK_SIZE + y;
                    let wz = chunk_pos.2 * CHUNK_SIZE + z;
                    if interactive.is_some_and(|i| i.is_door_open(wx, wy, wz)) {
                        // A thin open door is visually bounded on all sides,
                        // so no face of the slab is ever culled
                        for face in &FACES {
                            emit_face(&mut mesh, face, base, [1.0, 1.0, DOOR_SLAB_THICKNESS], color, uv);
                        }
                        continue;
                    }
                }

                for face in &FACES {
                    let nx = x + face.dir[0];
                    let ny = y + face.dir[1];
                    let nz = z + face.dir[2];
                    let neighbor = if (0..CHUNK_SIZE).contains(&nx)
                        && (0..CHUNK_SIZE).contains(&ny)
                        && (0..CHUNK_SIZE).contains(&nz)
                    {
                        chunk.get(nx, ny, nz)
                    } else {
                        neighbor_block(nx, ny, nz)
                    };
                    if neighbor != BlockType::Air {
                        continue;
                    }
                    emit_face(&mut mesh, face, base, [1.0, 1.0, 1.0], color, uv);
                }
            }
        }
    }

    mesh
}

fn emit_face(
    mesh: &mut ChunkMesh,
    face: &Face,
    base: [f32; 3],
    extent: [f32; 3],
    color: [f32; 3],
    uv: UvRect,
) {
    let corner = |c: [i32; 3]| {
        [
            base[0] + c[0] as f32 * extent[0],
            base[1] + c[1] as f32 * extent[1],
            base[2] + c[2] as f32 * extent[2],
        ]
    };
    let normal = [face.dir[0] as f32, face.dir[1] as f32, face.dir[2] as f32];
    add_quad(
        &mut mesh.vertices,
        &mut mesh.indices,
        corner(face.corners[0]),
        corner(face.corners[1]),
        corner(face.corners[2]),
        corner(face.corners[3]),
        normal,
        color,
        uv,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_air(_: i32, _: i32, _: i32) -> BlockType {
        BlockType::Air
    }

    fn all_basalt(_: i32, _: i32, _: i32) -> BlockType {
        BlockType::Basalt
    }

    #[test]
    fn single_block_is_a_unit_cube() {
        let mut chunk = Chunk::new();
        chunk.set(0, 0, 0, BlockType::Basalt);

        let mesh = build_chunk_mesh(&chunk, (0, 0, 0), all_air, None, None);
        assert_eq!(mesh.face_count(), 6);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        for v in &mesh.vertices {
            for axis in v.position {
                assert!(axis == 0.0 || axis == 1.0, "vertex escaped the unit cube");
            }
        }
    }

    #[test]
    fn adjacent_blocks_share_no_internal_faces() {
        let mut chunk = Chunk::new();
        chunk.set(0, 0, 0, BlockType::Basalt);
        chunk.set(1, 0, 0, BlockType::Basalt);

        let mesh = build_chunk_mesh(&chunk, (0, 0, 0), all_air, None, None);
        assert_eq!(mesh.face_count(), 10);
    }

    #[test]
    fn full_chunk_exposed_emits_boundary_only() {
        let mut chunk = Chunk::new();
        for z in 0..CHUNK_SIZE {
            for y in 0..CHUNK_SIZE {
                for x in 0..CHUNK_SIZE {
                    chunk.set(x, y, z, BlockType::Regolith);
                }
            }
        }

        let mesh = build_chunk_mesh(&chunk, (0, 0, 0), all_air, None, None);
        assert_eq!(mesh.face_count() as i32, 6 * CHUNK_SIZE * CHUNK_SIZE);
    }

    #[test]
    fn fully_enclosed_chunk_emits_nothing() {
        let mut chunk = Chunk::new();
        for z in 0..CHUNK_SIZE {
            for y in 0..CHUNK_SIZE {
                for x in 0..CHUNK_SIZE {
                    chunk.set(x, y, z, BlockType::Regolith);
                }
            }
        }

        let mesh = build_chunk_mesh(&chunk, (0, 0, 0), all_basalt, None, None);
        assert!(mesh.is_empty());
    }

    #[test]
    fn open_door_renders_as_thin_slab() {
        let mut chunk = Chunk::new();
        chunk.set(2, 2, 2, BlockType::AirlockDoor);
        let mut interactive = InteractiveBlocks::new();

        // Closed: an ordinary culled cube
        let closed = build_chunk_mesh(&chunk, (0, 0, 0), all_air, Some(&interactive), None);
        assert_eq!(closed.face_count(), 6);
        assert_eq!(face_depth(&closed), 1.0);

        // Open: still six faces, but a thin slab
        interactive.toggle_door(2, 2, 2);
        let open = build_chunk_mesh(&chunk, (0, 0, 0), all_air, Some(&interactive), None);
        assert_eq!(open.face_count(), 6);
        assert!((face_depth(&open) - DOOR_SLAB_THICKNESS).abs() < 1e-5);

        // And toggling back restores the culled cube geometry
        interactive.toggle_door(2, 2, 2);
        let closed_again =
            build_chunk_mesh(&chunk, (0, 0, 0), all_air, Some(&interactive), None);
        assert_eq!(closed_again.face_count(), 6);
        assert_eq!(face_depth(&closed_again), 1.0);
    }

    #[test]
    fn open_door_is_never_culled_by_neighbors() {
        let mut chunk = Chunk::new();
        chunk.set(2, 2, 2, BlockType::AirlockDoor);
        for dir in [
            (1, 0, 0),
            (-1, 0, 0),
            (0, 1, 0),
            (0, -1, 0),
            (0, 0, 1),
            (0, 0, -1),
        ] {
            chunk.set(2 + dir.0, 2 + dir.1, 2 + dir.2, BlockType::Basalt);
        }
        let mut interactive = InteractiveBlocks::new();

        // Enclosed closed door: zero faces of its own. The six basalt
        // neighbors expose five faces each (the one toward the door culls
        // against the solid door cell).
        let closed = build_chunk_mesh(&chunk, (0, 0, 0), all_air, Some(&interactive), None);
        assert_eq!(closed.face_count(), 30);

        // Opening the door adds its six slab faces and changes nothing else
        interactive.toggle_door(2, 2, 2);
        let open = build_chunk_mesh(&chunk, (0, 0, 0), all_air, Some(&interactive), None);
        assert_eq!(open.face_count(), 36);
    }

    #[test]
    fn closed_door_culls_against_solid_neighbors() {
        let mut chunk = Chunk::new();
        chunk.set(2, 2, 2, BlockType::AirlockDoor);
        let interactive = InteractiveBlocks::new();

        let mesh = build_chunk_mesh(&chunk, (0, 0, 0), all_basalt, Some(&interactive), None);
        // Surrounded by in-chunk Air on all six sides, so still 6 faces; now
        // bury it
        assert_eq!(mesh.face_count(), 6);

        for z in 0..CHUNK_SIZE {
            for y in 0..CHUNK_SIZE {
                for x in 0..CHUNK_SIZE {
                    if chunk.get(x, y, z) == BlockType::Air {
                        chunk.set(x, y, z, BlockType::Basalt);
                    }
                }
            }
        }
        let buried = build_chunk_mesh(&chunk, (0, 0, 0), all_basalt, Some(&interactive), None);
        assert!(buried.is_empty());
    }

    #[test]
    fn door_state_is_looked_up_in_world_coordinates() {
        let mut chunk = Chunk::new();
        chunk.set(0, 0, 0, BlockType::AirlockDoor);
        let mut interactive = InteractiveBlocks::new();
        interactive.toggle_door(-16, 0, 32);

        let mesh = build_chunk_mesh(&chunk, (-1, 0, 2), all_air, Some(&interactive), None);
        assert_eq!(face_depth(&mesh), DOOR_SLAB_THICKNESS);
    }

    #[test]
    fn atlas_uvs_stay_inside_the_block_strip() {
        let mut chunk = Chunk::new();
        chunk.set(0, 0, 0, BlockType::Basalt);
        let atlas = TextureAtlas::new();

        let mesh = build_chunk_mesh(&chunk, (0, 0, 0), all_air, None, Some(&atlas));
        let strip = atlas.uv_rect(BlockType::Basalt);
        for v in &mesh.vertices {
            assert!(v.uv[0] >= strip.u0 && v.uv[0] <= strip.u1);
            assert!(v.uv[1] >= 0.0 && v.uv[1] <= 1.0);
        }
    }

    fn face_depth(mesh: &ChunkMesh) -> f32 {
        let min_z = mesh
            .vertices
            .iter()
            .map(|v| v.position[2])
            .fold(f32::INFINITY, f32::min);
        let max_z = mesh
            .vertices
            .iter()
            .map(|v| v.position[2])
            .fold(f32::NEG_INFINITY, f32::max);
        max_z - min_z
    }
}
