use glam::Vec3;

use crate::constants::*;
use crate::world::store::World;

/// Thrust intent for one tick, expressed as held directions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThrustInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl ThrustInput {
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right || self.up || self.down
    }
}

/// The player body: a free-floating capsule-less AABB with jetpack thrust.
pub struct Player {
    pub position: Vec3,
    pub velocity: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub magnetic_boots: bool,
}

impl Player {
    pub fn new() -> Self {
        Player {
            position: Vec3::new(8.0, 20.0, 30.0),
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            magnetic_boots: false,
        }
    }

    /// View direction from yaw/pitch; -Z is forward at rest.
    pub fn look_dir(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch)
    }

    fn right_dir(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vec3::new(cos_yaw, 0.0, -sin_yaw)
    }

    /// Does the player AABB, with its eye at (ex, ey, ez), overlap any solid
    /// block?
    fn collides_at(world: &World, ex: f32, ey: f32, ez: f32) -> bool {
        let min_x = (ex - PLAYER_HALF_WIDTH).floor() as i32;
        let max_x = (ex + PLAYER_HALF_WIDTH).floor() as i32;
        let min_y = (ey - PLAYER_HEIGHT).floor() as i32;
        let max_y = (ey + 0.1).floor() as i32;
        let min_z = (ez - PLAYER_HALF_WIDTH).floor() as i32;
        let max_z = (ez + PLAYER_HALF_WIDTH).floor() as i32;

        for bx in min_x..=max_x {
            for by in min_y..=max_y {
                for bz in min_z..=max_z {
                    if world.is_solid(bx, by, bz) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Advance one tick: apply thrust, boot gravity, drag, then move with
    /// axis-separated collision so sliding along surfaces works.
    pub fn update(&mut self, dt: f32, input: &ThrustInput, thrust_enabled: bool, world: &World) {
        let forward = self.look_dir();
        let right = self.right_dir();
        let up = Vec3::Y;

        let mut thrust = Vec3::ZERO;
        if input.forward {
            thrust += forward;
        }
        if input.back {
            thrust -= forward;
        }
        if input.right {
            thrust += right;
        }
        if input.left {
            thrust -= right;
        }
        if input.up {
            thrust += up;
        }
        if input.down {
            thrust -= up;
        }
        if thrust_enabled && thrust.length_squared() > 0.0 {
            self.velocity += thrust.normalize() * THRUST_ACCELERATION * dt;
        }

        // Magnetic boots pull toward the surface directly underfoot
        if self.magnetic_boots {
            let below = (self.position.y - 1.6).floor() as i32;
            let bx = self.position.x.floor() as i32;
            let bz = self.position.z.floor() as i32;
            if world.is_solid(bx, below, bz) {
                self.velocity.y = self.velocity.y.max(0.0);
                self.position.y = self.position.y.max(below as f32 + 2.6);
            } else {
                self.velocity.y -= BOOT_GRAVITY * dt;
            }
        }

        self.velocity *= VELOCITY_DRAG;

        let mut step = self.velocity * dt;
        let p = self.position;
        if Self::collides_at(world, p.x + step.x, p.y, p.z) {
            step.x = 0.0;
            self.velocity.x = 0.0;
        }
        if Self::collides_at(world, p.x + step.x, p.y + step.y, p.z) {
            step.y = 0.0;
            self.velocity.y = 0.0;
        }
        if Self::collides_at(world, p.x + step.x, p.y + step.y, p.z + step.z) {
            step.z = 0.0;
            self.velocity.z = 0.0;
        }
        self.position += step;
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::block::BlockType;

    #[test]
    fn thrust_accelerates_forward() {
        let world = World::without_generator();
        let mut player = Player::new();
        let input = ThrustInput {
            forward: true,
            ..ThrustInput::default()
        };

        player.update(0.1, &input, true, &world);
        assert!(player.velocity.z < 0.0, "default view faces -Z");
        assert_eq!(player.velocity.x, 0.0);
    }

    #[test]
    fn no_fuel_means_no_thrust() {
        let world = World::without_generator();
        let mut player = Player::new();
        let input = ThrustInput {
            up: true,
            ..ThrustInput::default()
        };

        player.update(0.1, &input, false, &world);
        assert_eq!(player.velocity, Vec3::ZERO);
    }

    #[test]
    fn drag_decays_velocity() {
        let world = World::without_generator();
        let mut player = Player::new();
        player.velocity = Vec3::new(10.0, 0.0, 0.0);

        player.update(0.016, &ThrustInput::default(), true, &world);
        assert!(player.velocity.x < 10.0);
        assert!(player.velocity.x > 9.0);
    }

    #[test]
    fn collision_stops_the_blocked_axis_only() {
        let mut world = World::without_generator();
        // A wall at x = 2 spanning the player's height
        for y in 0..6 {
            for z in 0..6 {
                world.set_block(2, y, z, BlockType::SteelPlank);
            }
        }
        let mut player = Player::new();
        player.position = Vec3::new(1.2, 3.0, 3.0);
        player.velocity = Vec3::new(6.0, 0.0, -1.0);

        player.update(0.1, &ThrustInput::default(), true, &world);
        assert_eq!(player.velocity.x, 0.0, "x axis blocked by the wall");
        assert!(player.velocity.z < 0.0, "z axis keeps sliding");
        assert!(player.position.x < 2.0 - PLAYER_HALF_WIDTH);
    }

    #[test]
    fn free_flight_is_unobstructed() {
        let world = World::without_generator();
        let mut player = Player::new();
        player.velocity = Vec3::new(0.0, 3.0, 0.0);
        let y0 = player.position.y;

        player.update(0.1, &ThrustInput::default(), true, &world);
        assert!(player.position.y > y0);
    }
}
