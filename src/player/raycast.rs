use glam::Vec3;

use crate::core::block::BlockType;
use crate::world::store::World;

/// A solid block hit by a ray: the cell itself and the face normal the ray
/// entered through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RayHit {
    pub block: (i32, i32, i32),
    pub normal: (i32, i32, i32),
}

/// Walk the voxel grid cell by cell (DDA) along `dir` until a solid block
/// is hit or `max_dist` is exceeded.
pub fn raycast(world: &World, origin: Vec3, dir: Vec3, max_dist: f32) -> Option<RayHit> {
    let dir = dir.normalize_or_zero();
    if dir == Vec3::ZERO {
        return None;
    }

    let mut x = origin.x.floor() as i32;
    let mut y = origin.y.floor() as i32;
    let mut z = origin.z.floor() as i32;

    let step_x: i32 = if dir.x >= 0.0 { 1 } else { -1 };
    let step_y: i32 = if dir.y >= 0.0 { 1 } else { -1 };
    let step_z: i32 = if dir.z >= 0.0 { 1 } else { -1 };

    let t_delta_x = if dir.x != 0.0 { (1.0 / dir.x).abs() } else { f32::INFINITY };
    let t_delta_y = if dir.y != 0.0 { (1.0 / dir.y).abs() } else { f32::INFINITY };
    let t_delta_z = if dir.z != 0.0 { (1.0 / dir.z).abs() } else { f32::INFINITY };

    let mut t_max_x = if dir.x != 0.0 {
        let frac = if dir.x > 0.0 {
            x as f32 + 1.0 - origin.x
        } else {
            origin.x - x as f32
        };
        frac * t_delta_x
    } else {
        f32::INFINITY
    };
    let mut t_max_y = if dir.y != 0.0 {
        let frac = if dir.y > 0.0 {
            y as f32 + 1.0 - origin.y
        } else {
            origin.y - y as f32
        };
        frac * t_delta_y
    } else {
        f32::INFINITY
    };
    let mut t_max_z = if dir.z != 0.0 {
        let frac = if dir.z > 0.0 {
            z as f32 + 1.0 - origin.z
        } else {
            origin.z - z as f32
        };
        frac * t_delta_z
    } else {
        f32::INFINITY
    };

    let mut normal = (0, 0, 0);
    let mut t = 0.0;
    let max_steps = (max_dist * 3.0) as i32;

    for _ in 0..max_steps {
        if t_max_x < t_max_y {
            if t_max_x < t_max_z {
                t = t_max_x;
                x += step_x;
                t_max_x += t_delta_x;
                normal = (-step_x, 0, 0);
            } else {
                t = t_max_z;
                z += step_z;
                t_max_z += t_delta_z;
                normal = (0, 0, -step_z);
            }
        } else if t_max_y < t_max_z {
            t = t_max_y;
            y += step_y;
            t_max_y += t_delta_y;
            normal = (0, -step_y, 0);
        } else {
            t = t_max_z;
            z += step_z;
            t_max_z += t_delta_z;
            normal = (0, 0, -step_z);
        }

        if t > max_dist {
            break;
        }
        if world.get_block(x, y, z) != BlockType::Air {
            return Some(RayHit {
                block: (x, y, z),
                normal,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_the_facing_block() {
        let mut world = World::without_generator();
        world.set_block(0, 0, -5, BlockType::Basalt);

        let hit = raycast(
            &world,
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.0, 0.0, -1.0),
            8.0,
        )
        .expect("block in range straight ahead");
        assert_eq!(hit.block, (0, 0, -5));
        assert_eq!(hit.normal, (0, 0, 1), "entered through the +z face");
    }

    #[test]
    fn respects_max_distance() {
        let mut world = World::without_generator();
        world.set_block(0, 0, -20, BlockType::Basalt);

        let hit = raycast(
            &world,
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(0.0, 0.0, -1.0),
            8.0,
        );
        assert_eq!(hit, None);
    }

    #[test]
    fn misses_in_empty_space() {
        let world = World::without_generator();
        let hit = raycast(&world, Vec3::ZERO, Vec3::new(1.0, 0.3, -0.2), 8.0);
        assert_eq!(hit, None);
    }

    #[test]
    fn diagonal_rays_step_through_cells() {
        let mut world = World::without_generator();
        world.set_block(3, 3, 3, BlockType::Ice);

        let hit = raycast(
            &world,
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(1.0, 1.0, 1.0),
            8.0,
        )
        .expect("diagonal block in range");
        assert_eq!(hit.block, (3, 3, 3));
    }

    #[test]
    fn zero_direction_is_rejected() {
        let world = World::without_generator();
        assert_eq!(raycast(&world, Vec3::ZERO, Vec3::ZERO, 8.0), None);
    }
}
