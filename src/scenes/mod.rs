mod loader;
mod warehouse;

pub use loader::{load_obstacles, parse_obstacles, SceneError};
pub use warehouse::{
    create_warehouse_obstacles, conveyor_waypoints, CAMERA_SPAWN, CAMERA_SPAWN_PITCH,
    CAMERA_SPAWN_YAW,
};
