//! Deterministic asteroid field generation.
//!
//! One seeded stream decides the whole field: asteroid count first, then
//! per asteroid x, y, z, radius, sub-seed, in that order. The draw order is
//! part of the contract - reordering it changes every world.

use rustc_hash::FxHashMap;

use crate::constants::*;
use crate::core::block::BlockType;
use crate::core::chunk::Chunk;
use crate::world::noise::{Lcg, Noise3d};

/// One asteroid: center and radius in world space, plus the seed of its
/// private noise field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct AsteroidDef {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
    pub radius: i32,
    pub seed: u32,
}

impl AsteroidDef {
    /// Chunk-coordinate bounds of the region this asteroid can touch.
    pub fn chunk_bounds(&self) -> ((i32, i32, i32), (i32, i32, i32)) {
        let reach = self.radius + ASTEROID_MARGIN;
        let min = (
            (self.cx - reach).div_euclid(CHUNK_SIZE),
            (self.cy - reach).div_euclid(CHUNK_SIZE),
            (self.cz - reach).div_euclid(CHUNK_SIZE),
        );
        let max = (
            (self.cx + reach).div_euclid(CHUNK_SIZE),
            (self.cy + reach).div_euclid(CHUNK_SIZE),
            (self.cz + reach).div_euclid(CHUNK_SIZE),
        );
        (min, max)
    }
}

/// Fills chunks from a reproducible set of overlapping asteroid volumes.
pub struct AsteroidGenerator {
    pub asteroids: Vec<AsteroidDef>,
    noise_cache: FxHashMap<u32, Noise3d>,
    pub seed: u32,
}

impl AsteroidGenerator {
    pub fn new(seed: u32) -> Self {
        let mut rng = Lcg::new(seed);
        let count = ASTEROID_COUNT_MIN + (rng.next_f64() * ASTEROID_COUNT_SPAN) as u32;

        let mut asteroids = Vec::with_capacity(count as usize);
        for _ in 0..count {
            asteroids.push(AsteroidDef {
                cx: ((rng.next_f64() - 0.5) * ASTEROID_PLACEMENT_SPAN) as i32,
                cy: ((rng.next_f64() - 0.5) * ASTEROID_PLACEMENT_SPAN) as i32,
                cz: ((rng.next_f64() - 0.5) * ASTEROID_PLACEMENT_SPAN) as i32,
                radius: ASTEROID_RADIUS_MIN + (rng.next_f64() * ASTEROID_RADIUS_SPAN) as i32,
                seed: (rng.next_f64() * f64::from(0x7fff_ffffu32)) as u32,
            });
        }

        tracing::debug!(seed, count = asteroids.len(), "asteroid field derived");

        AsteroidGenerator {
            asteroids,
            noise_cache: FxHashMap::default(),
            seed,
        }
    }

    /// Fill `chunk` with every asteroid that overlaps it. A cell already
    /// written by an earlier asteroid in this call is never overwritten.
    pub fn generate_chunk(&mut self, chunk: &mut Chunk, chunk_x: i32, chunk_y: i32, chunk_z: i32) {
        let wx0 = chunk_x * CHUNK_SIZE;
        let wy0 = chunk_y * CHUNK_SIZE;
        let wz0 = chunk_z * CHUNK_SIZE;

        for ast in self.asteroids.clone() {
            // Bounding box rejection keeps generation proportional to the
            // chunks an asteroid actually touches
            let margin = ast.radius + ASTEROID_MARGIN;
            if wx0 + CHUNK_SIZE < ast.cx - margin || wx0 > ast.cx + margin {
                continue;
            }
            if wy0 + CHUNK_SIZE < ast.cy - margin || wy0 > ast.cy + margin {
                continue;
            }
            if wz0 + CHUNK_SIZE < ast.cz - margin || wz0 > ast.cz + margin {
                continue;
            }

            let noise = self
                .noise_cache
                .entry(ast.seed)
                .or_insert_with(|| Noise3d::new(ast.seed));

            for lz in 0..CHUNK_SIZE {
                for ly in 0..CHUNK_SIZE {
                    for lx in 0..CHUNK_SIZE {
                        let wx = wx0 + lx;
                        let wy = wy0 + ly;
                        let wz = wz0 + lz;
                        let dx = f64::from(wx - ast.cx);
                        let dy = f64::from(wy - ast.cy);
                        let dz = f64::from(wz - ast.cz);
                        let dist = (dx * dx + dy * dy + dz * dz).sqrt();
                        if dist > f64::from(margin) {
                            continue;
                        }

                        let n = noise.sample(
                            f64::from(wx) * SHAPE_FREQUENCY,
                            f64::from(wy) * SHAPE_FREQUENCY,
                            f64::from(wz) * SHAPE_FREQUENCY,
                        );
                        // 0 at the center, 1 at the nominal edge
                        let normalized = dist / f64::from(ast.radius);
                        if n + (1.0 - normalized) * RADIAL_BIAS < SOLID_CUTOFF {
                            continue;
                        }

                        // First writer wins on overlapping asteroids
                        if chunk.get(lx, ly, lz) != BlockType::Air {
                            continue;
                        }

                        chunk.set(lx, ly, lz, Self::classify(noise, wx, wy, wz, dist, ast.radius));
                    }
                }
            }
        }
    }

    /// Pick a solid cell's material from the radial band and the secondary,
    /// phase-offset noise field.
    fn classify(noise: &Noise3d, wx: i32, wy: i32, wz: i32, dist: f64, radius: i32) -> BlockType {
        if dist > f64::from(radius) * SHELL_FRACTION {
            return BlockType::Regolith;
        }

        let n2 = noise.sample(
            f64::from(wx) * ORE_FREQUENCY + ORE_PHASE_OFFSET,
            f64::from(wy) * ORE_FREQUENCY,
            f64::from(wz) * ORE_FREQUENCY + ORE_PHASE_OFFSET,
        );
        if n2 > IRON_THRESHOLD {
            BlockType::IronOre
        } else if n2 < ICE_THRESHOLD {
            BlockType::Ice
        } else if n2 < NICKEL_THRESHOLD {
            BlockType::Nickel
        } else {
            BlockType::Basalt
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_field() {
        let a = AsteroidGenerator::new(42);
        let b = AsteroidGenerator::new(42);
        assert_eq!(a.asteroids, b.asteroids);
    }

    #[test]
    fn seed_42_count_in_contract_range() {
        let generator = AsteroidGenerator::new(42);
        let count = generator.asteroids.len() as u32;
        assert!(
            (ASTEROID_COUNT_MIN..ASTEROID_COUNT_MIN + ASTEROID_COUNT_SPAN as u32 + 1)
                .contains(&count),
            "count {count} outside [12, 19]"
        );
        for ast in &generator.asteroids {
            assert!(ast.radius >= ASTEROID_RADIUS_MIN);
            assert!(ast.radius <= ASTEROID_RADIUS_MIN + ASTEROID_RADIUS_SPAN as i32);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = AsteroidGenerator::new(1);
        let b = AsteroidGenerator::new(2);
        assert_ne!(a.asteroids, b.asteroids);
    }

    #[test]
    fn chunk_generation_is_deterministic() {
        let mut a = AsteroidGenerator::new(42);
        let mut b = AsteroidGenerator::new(42);
        let target = a.asteroids[0];
        let (cx, cy, cz) = (
            target.cx.div_euclid(CHUNK_SIZE),
            target.cy.div_euclid(CHUNK_SIZE),
            target.cz.div_euclid(CHUNK_SIZE),
        );

        let mut chunk_a = Chunk::new();
        let mut chunk_b = Chunk::new();
        a.generate_chunk(&mut chunk_a, cx, cy, cz);
        b.generate_chunk(&mut chunk_b, cx, cy, cz);
        assert_eq!(chunk_a.to_bytes(), chunk_b.to_bytes());
    }

    #[test]
    fn center_chunk_gets_solid_blocks() {
        let mut generator = AsteroidGenerator::new(42);
        let target = generator.asteroids[0];
        let mut chunk = Chunk::new();
        generator.generate_chunk(
            &mut chunk,
            target.cx.div_euclid(CHUNK_SIZE),
            target.cy.div_euclid(CHUNK_SIZE),
            target.cz.div_euclid(CHUNK_SIZE),
        );
        assert!(chunk.solid_count() > 0, "asteroid center chunk came out empty");
    }

    #[test]
    fn far_chunk_stays_empty() {
        let mut generator = AsteroidGenerator::new(42);
        // Placement span is +-100 plus a max reach of 16, so 10_000 is far
        // outside every bounding box
        let mut chunk = Chunk::new();
        generator.generate_chunk(&mut chunk, 10_000, 10_000, 10_000);
        assert!(chunk.is_empty());
    }

    #[test]
    fn chunk_bounds_cover_reach() {
        let ast = AsteroidDef {
            cx: 0,
            cy: 0,
            cz: 0,
            radius: 10,
            seed: 1,
        };
        let ((min_x, ..), (max_x, ..)) = ast.chunk_bounds();
        assert_eq!(min_x, (-13i32).div_euclid(CHUNK_SIZE));
        assert_eq!(max_x, 0);
    }
}
