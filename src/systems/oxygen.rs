use glam::Vec3;

use crate::constants::*;
use crate::world::store::World;

/// Suit oxygen. Refills while the player floats nearly at rest next to any
/// solid block (sheltering against a surface), depletes otherwise.
pub struct Oxygen {
    pub level: f32,
}

impl Oxygen {
    pub fn new() -> Self {
        Oxygen { level: OXYGEN_MAX }
    }

    pub fn is_depleted(&self) -> bool {
        self.level <= 0.0
    }

    pub fn update(&mut self, dt: f32, position: Vec3, velocity: Vec3, world: &World) {
        let px = position.x.floor() as i32;
        let py = position.y.floor() as i32;
        let pz = position.z.floor() as i32;

        let r = OXYGEN_SHELTER_RADIUS;
        let mut near_block = false;
        'scan: for dx in -r..=r {
            for dy in -r..=r {
                for dz in -r..=r {
                    if world.is_solid(px + dx, py + dy, pz + dz) {
                        near_block = true;
                        break 'scan;
                    }
                }
            }
        }

        if near_block && velocity.length() < OXYGEN_REST_SPEED {
            self.level = (self.level + OXYGEN_REFILL_RATE * dt).min(OXYGEN_MAX);
        } else {
            self.level = (self.level - OXYGEN_DEPLETE_RATE * dt).max(0.0);
        }
    }
}

impl Default for Oxygen {
    fn default() -> Self {
        Oxygen::new()
    }
}
