//! Sparse chunk store with lazy generation and dirty tracking.
//!
//! Chunks live in a hash map keyed by chunk coordinate; the explorable
//! space is far larger than anything a dense array could hold. "Exists"
//! and "already generated" are tracked separately so lazy generation and
//! edit preservation stay decoupled: a chunk restored from a save is never
//! handed back to the generator.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::chunk::Chunk;
use crate::render::atlas::TextureAtlas;
use crate::render::mesh::ChunkMesh;
use crate::world::generator::AsteroidGenerator;
use crate::world::interactive::InteractiveBlocks;
use crate::world::mesher::build_chunk_mesh;

pub type ChunkPos = (i32, i32, i32);

/// Split a world coordinate into (chunk, local) along one axis. Every
/// component uses this same mapping; the mesher's neighbor lookups and the
/// store's get/set must agree exactly or chunk seams appear.
pub fn split_axis(w: i32) -> (i32, i32) {
    (w.div_euclid(CHUNK_SIZE), w.rem_euclid(CHUNK_SIZE))
}

fn block_at(chunks: &FxHashMap<ChunkPos, Chunk>, wx: i32, wy: i32, wz: i32) -> BlockType {
    let (cx, lx) = split_axis(wx);
    let (cy, ly) = split_axis(wy);
    let (cz, lz) = split_axis(wz);
    match chunks.get(&(cx, cy, cz)) {
        Some(chunk) => chunk.get(lx, ly, lz),
        None => BlockType::Air,
    }
}

pub struct World {
    pub chunks: FxHashMap<ChunkPos, Chunk>,
    /// Current mesh per chunk; chunks with no visible faces have no entry.
    pub meshes: FxHashMap<ChunkPos, ChunkMesh>,
    /// Chunk coordinates modified since the last save. The sole signal for
    /// what persistence has to write.
    pub dirty: FxHashSet<ChunkPos>,
    /// Chunks the generator has already filled. Checked separately from
    /// existence so player edits are never regenerated over.
    generated: FxHashSet<ChunkPos>,
    generator: Option<AsteroidGenerator>,
}

impl World {
    pub fn new(seed: u32) -> Self {
        World {
            chunks: FxHashMap::default(),
            meshes: FxHashMap::default(),
            dirty: FxHashSet::default(),
            generated: FxHashSet::default(),
            generator: Some(AsteroidGenerator::new(seed)),
        }
    }

    /// A world with no generator: every unmaterialized chunk comes up empty.
    pub fn without_generator() -> Self {
        World {
            chunks: FxHashMap::default(),
            meshes: FxHashMap::default(),
            dirty: FxHashSet::default(),
            generated: FxHashSet::default(),
            generator: None,
        }
    }

    pub fn generator(&self) -> Option<&AsteroidGenerator> {
        self.generator.as_ref()
    }

    pub fn seed(&self) -> Option<u32> {
        self.generator.as_ref().map(|g| g.seed)
    }

    /// Get the chunk at a chunk coordinate, materializing and generating it
    /// on first access. Generation happens at most once per coordinate.
    pub fn get_chunk(&mut self, cx: i32, cy: i32, cz: i32) -> &Chunk {
        let pos = (cx, cy, cz);
        let chunk = self.chunks.entry(pos).or_default();
        if self.generated.insert(pos) {
            if let Some(generator) = self.generator.as_mut() {
                generator.generate_chunk(chunk, cx, cy, cz);
            }
        }
        chunk
    }

    /// Mark a chunk as generated without running the generator, for chunks
    /// restored verbatim from a save.
    pub fn mark_generated(&mut self, cx: i32, cy: i32, cz: i32) {
        self.generated.insert((cx, cy, cz));
    }

    pub fn get_block(&self, wx: i32, wy: i32, wz: i32) -> BlockType {
        block_at(&self.chunks, wx, wy, wz)
    }

    /// Write one block and mark the owning chunk dirty. Materializes the
    /// chunk first so placements far from any asteroid persist too.
    pub fn set_block(&mut self, wx: i32, wy: i32, wz: i32, block: BlockType) {
        let (cx, lx) = split_axis(wx);
        let (cy, ly) = split_axis(wy);
        let (cz, lz) = split_axis(wz);
        self.get_chunk(cx, cy, cz);
        if let Some(chunk) = self.chunks.get_mut(&(cx, cy, cz)) {
            chunk.set(lx, ly, lz, block);
            self.dirty.insert((cx, cy, cz));
        }
    }

    pub fn is_solid(&self, wx: i32, wy: i32, wz: i32) -> bool {
        self.get_block(wx, wy, wz).is_solid()
    }

    /// Rebuild the mesh for one chunk from its current blocks. The previous
    /// mesh is always released; a mesh with no visible faces is not
    /// retained. No cached chunk at the coordinate is a silent no-op.
    pub fn rebuild_chunk_mesh(
        &mut self,
        cx: i32,
        cy: i32,
        cz: i32,
        interactive: Option<&InteractiveBlocks>,
        atlas: Option<&TextureAtlas>,
    ) {
        let pos = (cx, cy, cz);
        self.meshes.remove(&pos);

        let Some(chunk) = self.chunks.get(&pos) else {
            return;
        };
        let chunks = &self.chunks;
        let mesh = build_chunk_mesh(
            chunk,
            pos,
            |lx, ly, lz| {
                // Overflowed local coordinates resolve through the world so
                // faces cull across chunk boundaries
                block_at(
                    chunks,
                    cx * CHUNK_SIZE + lx,
                    cy * CHUNK_SIZE + ly,
                    cz * CHUNK_SIZE + lz,
                )
            },
            interactive,
            atlas,
        );

        if !mesh.is_empty() {
            self.meshes.insert(pos, mesh);
        }
    }

    /// Rebuild every loaded chunk's mesh, e.g. after load-from-save.
    pub fn rebuild_all_meshes(
        &mut self,
        interactive: Option<&InteractiveBlocks>,
        atlas: Option<&TextureAtlas>,
    ) {
        let positions: Vec<ChunkPos> = self.chunks.keys().copied().collect();
        for (cx, cy, cz) in positions {
            self.rebuild_chunk_mesh(cx, cy, cz, interactive, atlas);
        }
    }

    /// Materialize every chunk any asteroid can reach, then build all
    /// meshes. One synchronous pass at world start; afterwards the whole
    /// explorable field is resident.
    pub fn generate_all(
        &mut self,
        interactive: Option<&InteractiveBlocks>,
        atlas: Option<&TextureAtlas>,
    ) {
        let bounds: Vec<_> = match self.generator.as_ref() {
            Some(generator) => generator.asteroids.iter().map(|a| a.chunk_bounds()).collect(),
            None => return,
        };

        for ((min_x, min_y, min_z), (max_x, max_y, max_z)) in bounds {
            for cz in min_z..=max_z {
                for cy in min_y..=max_y {
                    for cx in min_x..=max_x {
                        self.get_chunk(cx, cy, cz);
                    }
                }
            }
        }
        self.rebuild_all_meshes(interactive, atlas);

        tracing::info!(
            chunks = self.chunks.len(),
            meshes = self.meshes.len(),
            "world generated"
        );
    }
}
