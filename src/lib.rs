pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod input;
pub mod math;
pub mod scenes;
pub mod simulation;
pub mod traits;
pub mod types;

pub use camera::Camera;
pub use crate::core::collision::{CollisionStrategy, Obstacle, ObstacleSet};
pub use crate::core::movement::{MotionController, MoveOutcome, Movement, MovementMode};
pub use simulation::Simulation;
