//! Texture atlas addressing and procedural atlas pixels.
//!
//! The atlas is a single row of square tiles, one per block type, so a
//! block's UV region is a horizontal strip of width 1/COUNT.

use crate::constants::*;
use crate::core::block::BlockType;
use crate::world::noise::Lcg;

/// A rectangular UV region of the atlas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvRect {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
}

impl UvRect {
    /// The whole texture; what the mesher uses when no atlas is supplied.
    pub const FULL: UvRect = UvRect {
        u0: 0.0,
        v0: 0.0,
        u1: 1.0,
        v1: 1.0,
    };
}

/// Maps block types to their strip in the shared atlas texture.
pub struct TextureAtlas {
    strip_count: u32,
}

impl TextureAtlas {
    pub fn new() -> Self {
        TextureAtlas {
            strip_count: BlockType::COUNT,
        }
    }

    pub fn uv_rect(&self, block: BlockType) -> UvRect {
        let idx = block.atlas_index() as f32;
        let count = self.strip_count as f32;
        UvRect {
            u0: idx / count,
            v0: 0.0,
            u1: (idx + 1.0) / count,
            v1: 1.0,
        }
    }

    pub fn width(&self) -> u32 {
        ATLAS_TILE_SIZE * self.strip_count
    }

    pub fn height(&self) -> u32 {
        ATLAS_TILE_SIZE
    }

    /// Generate RGBA8 atlas pixels for the rendering layer: each tile is the
    /// block's base color with deterministic per-pixel grain. The Air tile
    /// stays fully transparent.
    pub fn generate_pixels(&self) -> Vec<u8> {
        let width = self.width() as usize;
        let height = self.height() as usize;
        let mut pixels = vec![0u8; width * height * 4];

        for code in 1..self.strip_count {
            let block = BlockType::from_code(code as u8);
            let [r, g, b] = block.color();
            // Seed grain per tile so the atlas is identical across runs
            let mut rng = Lcg::new(code * 7919 + 1337);

            for py in 0..height {
                for px in 0..ATLAS_TILE_SIZE as usize {
                    let x = code as usize * ATLAS_TILE_SIZE as usize + px;
                    let i = (py * width + x) * 4;
                    let grain = (rng.next_f64() - 0.5) * 0.15;
                    pixels[i] = channel(f64::from(r) + grain);
                    pixels[i + 1] = channel(f64::from(g) + grain);
                    pixels[i + 2] = channel(f64::from(b) + grain);
                    pixels[i + 3] = 255;
                }
            }
        }

        pixels
    }
}

impl Default for TextureAtlas {
    fn default() -> Self {
        TextureAtlas::new()
    }
}

fn channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}
