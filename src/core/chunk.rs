use crate::constants::*;
use crate::core::block::BlockType;

/// A 16x16x16 cube of block codes, the unit of storage and mesh rebuild.
///
/// Local coordinates run over [0, CHUNK_SIZE) per axis; out-of-range access
/// is defined as Air on read and a no-op on write, never a fault.
pub struct Chunk {
    blocks: [BlockType; CHUNK_VOLUME],
}

impl Chunk {
    pub fn new() -> Self {
        Chunk {
            blocks: [BlockType::Air; CHUNK_VOLUME],
        }
    }

    fn index(x: i32, y: i32, z: i32) -> usize {
        (x + y * CHUNK_SIZE + z * CHUNK_SIZE * CHUNK_SIZE) as usize
    }

    fn in_range(x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < CHUNK_SIZE && y >= 0 && y < CHUNK_SIZE && z >= 0 && z < CHUNK_SIZE
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> BlockType {
        if Self::in_range(x, y, z) {
            self.blocks[Self::index(x, y, z)]
        } else {
            BlockType::Air
        }
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, block: BlockType) {
        if Self::in_range(x, y, z) {
            self.blocks[Self::index(x, y, z)] = block;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| *b == BlockType::Air)
    }

    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.is_solid()).count()
    }

    /// Raw block codes in `x + y*S + z*S*S` order, for persistence.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.blocks.iter().map(|b| b.code()).collect()
    }

    /// Overwrite the block array from raw codes. Short input leaves the
    /// remaining cells untouched; unknown codes decode to Air.
    pub fn fill_from_bytes(&mut self, bytes: &[u8]) {
        for (cell, code) in self.blocks.iter_mut().zip(bytes.iter()) {
            *cell = BlockType::from_code(*code);
        }
    }
}

impl Default for Chunk {
    fn default() -> Self {
        Chunk::new()
    }
}
