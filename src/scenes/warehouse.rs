use glam::Vec3;

use crate::animation::ConveyorWaypoints;
use crate::core::collision::{Obstacle, ObstacleSet};
use crate::math::AABB;

pub const CAMERA_SPAWN: Vec3 = Vec3::new(-3.70, 0.30, -3.08);
pub const CAMERA_SPAWN_YAW: f32 = -90.0;
pub const CAMERA_SPAWN_PITCH: f32 = 0.0;

/// Hand-measured collision volumes for the sorting floor.
/// Coordinates are world space and match the placed meshes.
const WAREHOUSE_OBSTACLES: [(&str, [f32; 3], [f32; 3]); 10] = [
    ("main conveyor", [-5.33, -0.01, 0.26], [-1.51, 0.93, 0.97]),
    ("forklift", [-4.88, 0.00, -3.82], [-4.50, 0.98, -2.32]),
    ("cloth", [-1.51, 0.04, -1.66], [-0.55, 0.65, -1.06]),
    ("l-wall", [-2.2, 0.03, -0.78], [5.8, 1.04, 3.9]),
    ("conveyor side wall", [-6.2, 0.03, -4.76], [-5.1, 1.98, 3.25]),
    ("rack side wall", [-5.25, 0.03, -5.7], [5.43, 1.01, -4.7]),
    ("back wall", [5.35, 0.03, -4.70], [5.81, 1.0, -0.79]),
    ("rack 1", [-2.0, -0.01, -2.17], [3.35, 0.73, -1.79]),
    ("rack 2", [-1.96, 0.01, -3.21], [3.37, 0.72, -2.78]),
    ("rack 3", [-2.01, -0.01, -4.19], [3.37, 0.69, -3.80]),
];

pub fn create_warehouse_obstacles() -> ObstacleSet {
    let obstacles: ObstacleSet = WAREHOUSE_OBSTACLES
        .iter()
        .map(|&(name, min, max)| Obstacle::new(name, AABB::from_corners(min, max)))
        .collect();

    log::info!("Warehouse scene: {} obstacle volumes", obstacles.len());
    obstacles
}

pub fn conveyor_waypoints() -> ConveyorWaypoints {
    ConveyorWaypoints {
        large_spawn: Vec3::new(-5.5, 0.2, 0.8),
        large_stop: Vec3::new(-4.7, 0.2, 0.8),
        large_final: Vec3::new(-2.0, 0.2, 0.8),
        small_spawn: Vec3::new(-4.3, 0.55, 3.43),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_volume_is_well_formed() {
        for obstacle in create_warehouse_obstacles().iter() {
            assert!(obstacle.bounds.is_valid(), "{} has inverted bounds", obstacle.name);
        }
    }

    #[test]
    fn spawn_point_is_clear() {
        let obstacles = create_warehouse_obstacles();
        assert!(obstacles.iter().all(|o| !o.bounds.contains_point(CAMERA_SPAWN)));
    }
}
