//! Collision-aware movement for a first-person [`Camera`].
//!
//! Every intent is resolved in four steps: build a candidate position from
//! the camera basis, constrain it to the movement plane, test it against the
//! obstacle set, then commit it or leave the camera where it was. A blocked
//! move is rejected whole; there is no sliding along the free axis.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::core::collision::{CollisionStrategy, ObstacleSet};
use crate::traits::CollisionTest;

pub const GRAVITY: f32 = -9.81;
pub const JUMP_STRENGTH: f32 = 3.0;

/// Discrete movement intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

/// How candidates are constrained before the obstacle test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MovementMode {
    /// Walk on a fixed plane: front/right are flattened and the height is pinned
    GroundLocked { ground_level: f32 },
    /// Raw basis vectors, vertical intents honoured
    FreeFlight,
}

/// Result of a single movement intent
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    Moved { from: Vec3, to: Vec3 },
    /// Rejected; `obstacle` indexes the set the controller was built with
    Blocked { obstacle: usize },
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    pub fn is_blocked(&self) -> bool {
        matches!(self, MoveOutcome::Blocked { .. })
    }
}

/// Vertical jump state, only used in ground-locked mode
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Jump {
    /// Height above the ground level
    pub height: f32,
    pub velocity: f32,
    pub airborne: bool,
}

impl Jump {
    fn start(&mut self, strength: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.velocity = strength;
        true
    }

    fn integrate(&mut self, delta_time: f32) {
        if !self.airborne {
            return;
        }
        self.velocity += GRAVITY * delta_time;
        self.height += self.velocity * delta_time;

        if self.height <= 0.0 {
            *self = Jump::default();
        }
    }
}

pub struct MotionController {
    obstacles: ObstacleSet,
    collider: Box<dyn CollisionTest>,
    mode: MovementMode,
    jump: Jump,
}

impl MotionController {
    pub fn new(obstacles: ObstacleSet, strategy: CollisionStrategy, mode: MovementMode) -> Self {
        Self::with_collider(obstacles, strategy.build(), mode)
    }

    pub fn with_collider(
        obstacles: ObstacleSet,
        collider: Box<dyn CollisionTest>,
        mode: MovementMode,
    ) -> Self {
        log::debug!(
            "motion controller: {} obstacles, {} test, {:?}",
            obstacles.len(),
            collider.name(),
            mode
        );
        Self {
            obstacles,
            collider,
            mode,
            jump: Jump::default(),
        }
    }

    /// Ground-locked controller whose floor is the camera's current height
    pub fn ground_locked_at(
        camera: &Camera,
        obstacles: ObstacleSet,
        strategy: CollisionStrategy,
    ) -> Self {
        Self::new(
            obstacles,
            strategy,
            MovementMode::GroundLocked {
                ground_level: camera.position.y,
            },
        )
    }

    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    pub fn collider_name(&self) -> &'static str {
        self.collider.name()
    }

    pub fn jump_state(&self) -> Jump {
        self.jump
    }

    pub fn is_ground_locked(&self) -> bool {
        matches!(self.mode, MovementMode::GroundLocked { .. })
    }

    /// Point tested against the obstacles for `movement`, without committing it.
    /// Ground-locked candidates sit on the ground level whatever the jump height.
    pub fn candidate(&self, camera: &Camera, movement: Movement, delta_time: f32) -> Vec3 {
        let velocity = camera.movement_speed * delta_time;
        let (front, right) = match self.mode {
            MovementMode::GroundLocked { .. } => (flatten(camera.front()), flatten(camera.right())),
            MovementMode::FreeFlight => (camera.front(), camera.right()),
        };

        let mut candidate = camera.position
            + match movement {
                Movement::Forward => front * velocity,
                Movement::Backward => -front * velocity,
                Movement::Left => -right * velocity,
                Movement::Right => right * velocity,
                Movement::Up => camera.world_up() * velocity,
                Movement::Down => -camera.world_up() * velocity,
            };

        if let MovementMode::GroundLocked { ground_level } = self.mode {
            candidate.y = ground_level;
        }
        candidate
    }

    /// Position the camera takes when `candidate` is clear; a jump keeps its height
    fn committed(&self, candidate: Vec3) -> Vec3 {
        match self.mode {
            MovementMode::GroundLocked { ground_level } => Vec3::new(
                candidate.x,
                ground_level + self.jump.height,
                candidate.z,
            ),
            MovementMode::FreeFlight => candidate,
        }
    }

    /// Resolve one intent against the obstacle set, updating the camera on success
    pub fn process_movement(
        &self,
        camera: &mut Camera,
        movement: Movement,
        delta_time: f32,
    ) -> MoveOutcome {
        let candidate = self.candidate(camera, movement, delta_time);

        match self.obstacles.first_hit(self.collider.as_ref(), candidate) {
            Some(obstacle) => {
                log::trace!(
                    "{:?} blocked by '{}' at {:?}",
                    movement,
                    self.obstacles.get(obstacle).map_or("?", |o| o.name.as_str()),
                    candidate
                );
                MoveOutcome::Blocked { obstacle }
            }
            None => {
                let from = camera.position;
                let to = self.committed(candidate);
                camera.position = to;
                MoveOutcome::Moved { from, to }
            }
        }
    }

    /// Start a jump. Ignored in free flight or while already airborne.
    pub fn jump(&mut self) -> bool {
        if !self.is_ground_locked() {
            return false;
        }
        self.jump.start(JUMP_STRENGTH)
    }

    /// Advance the jump by one tick and place the camera at the resulting height
    pub fn update(&mut self, camera: &mut Camera, delta_time: f32) {
        let MovementMode::GroundLocked { ground_level } = self.mode else {
            return;
        };
        if !self.jump.airborne {
            return;
        }

        self.jump.integrate(delta_time);
        camera.position.y = ground_level + self.jump.height;
    }
}

/// Project onto the horizontal plane; a vertical vector has no horizontal heading
fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::collision::Obstacle;
    use crate::math::AABB;

    const EPS: f32 = 1e-5;

    fn free_flight(obstacles: Vec<Obstacle>) -> MotionController {
        MotionController::new(
            ObstacleSet::new(obstacles),
            CollisionStrategy::PointInBox,
            MovementMode::FreeFlight,
        )
    }

    #[test]
    fn forward_from_origin_moves_along_negative_z() {
        let mut camera = Camera::default();
        let controller = free_flight(vec![]);
        let outcome = controller.process_movement(&mut camera, Movement::Forward, 1.0);
        assert!(outcome.is_moved());
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, -1.5), EPS));
    }

    #[test]
    fn backward_undoes_forward() {
        let mut camera = Camera::default();
        let controller = free_flight(vec![]);
        controller.process_movement(&mut camera, Movement::Forward, 0.5);
        controller.process_movement(&mut camera, Movement::Backward, 0.5);
        assert!(camera.position.abs_diff_eq(Vec3::ZERO, EPS));
    }

    #[test]
    fn free_flight_honours_vertical_intents() {
        let mut camera = Camera::default();
        let controller = free_flight(vec![]);
        controller.process_movement(&mut camera, Movement::Up, 2.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 3.0, 0.0), EPS));
        controller.process_movement(&mut camera, Movement::Down, 1.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 1.5, 0.0), EPS));
    }

    #[test]
    fn free_flight_uses_raw_front() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 450.0, true); // pitch 45
        let controller = free_flight(vec![]);
        controller.process_movement(&mut camera, Movement::Forward, 1.0);
        assert!(camera.position.y > 1.0);
    }

    #[test]
    fn ground_locked_ignores_vertical_intents() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.3, 0.0), Vec3::Y, -90.0, 0.0);
        let controller = MotionController::ground_locked_at(
            &camera,
            ObstacleSet::default(),
            CollisionStrategy::PointInBox,
        );
        let outcome = controller.process_movement(&mut camera, Movement::Up, 1.0);
        assert!(outcome.is_moved());
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.3, 0.0), EPS));
    }

    #[test]
    fn ground_locked_forward_keeps_full_speed_when_pitched() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::Y, -90.0, 0.0);
        camera.process_mouse_movement(0.0, -600.0, true); // pitch -60
        let controller = MotionController::ground_locked_at(
            &camera,
            ObstacleSet::default(),
            CollisionStrategy::PointInBox,
        );
        controller.process_movement(&mut camera, Movement::Forward, 1.0);
        assert!(camera.position.abs_diff_eq(Vec3::new(0.0, 0.0, -1.5), 1e-4));
    }

    #[test]
    fn blocked_move_leaves_position_and_names_obstacle() {
        let wall = Obstacle::new("wall", AABB::from_corners([-1.0, -1.0, -2.0], [1.0, 1.0, -1.0]));
        let mut camera = Camera::default();
        let controller = free_flight(vec![wall]);
        let outcome = controller.process_movement(&mut camera, Movement::Forward, 1.0);
        assert_eq!(outcome, MoveOutcome::Blocked { obstacle: 0 });
        assert_eq!(camera.position, Vec3::ZERO);
    }

    #[test]
    fn candidate_does_not_mutate() {
        let camera = Camera::default();
        let controller = free_flight(vec![]);
        let candidate = controller.candidate(&camera, Movement::Right, 1.0);
        assert!(candidate.abs_diff_eq(Vec3::new(1.5, 0.0, 0.0), EPS));
        assert_eq!(camera.position, Vec3::ZERO);
    }

    #[test]
    fn jump_rises_then_lands_on_ground_level() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.3, 0.0), Vec3::Y, -90.0, 0.0);
        let mut controller = MotionController::ground_locked_at(
            &camera,
            ObstacleSet::default(),
            CollisionStrategy::PointInBox,
        );
        assert!(controller.jump());
        assert!(!controller.jump(), "no double jump while airborne");

        let mut peak: f32 = 0.0;
        for _ in 0..200 {
            controller.update(&mut camera, 0.01);
            peak = peak.max(camera.position.y);
        }
        assert!(peak > 0.6);
        assert!(!controller.jump_state().airborne);
        assert_eq!(camera.position.y, 0.3);
    }

    #[test]
    fn walking_mid_jump_keeps_jump_height() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::Y, -90.0, 0.0);
        let mut controller = MotionController::ground_locked_at(
            &camera,
            ObstacleSet::default(),
            CollisionStrategy::PointInBox,
        );
        controller.jump();
        controller.update(&mut camera, 0.05);
        let height = camera.position.y;
        assert!(height > 0.0);
        controller.process_movement(&mut camera, Movement::Forward, 0.01);
        assert_eq!(camera.position.y, height);
    }

    #[test]
    fn airborne_move_is_tested_at_ground_level() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.3, 0.0), Vec3::Y, -90.0, 0.0);
        let crate_box = Obstacle::new("crate", AABB::from_corners([-1.0, 0.0, -2.0], [1.0, 0.5, -0.01]));
        let mut controller = MotionController::ground_locked_at(
            &camera,
            ObstacleSet::new(vec![crate_box]),
            CollisionStrategy::PointInBox,
        );
        controller.jump();
        for _ in 0..20 {
            controller.update(&mut camera, 0.01);
        }
        let airborne = camera.position;
        assert!(airborne.y > 0.5, "jump should clear the crate top");

        let outcome = controller.process_movement(&mut camera, Movement::Forward, 0.1);

        assert_eq!(outcome, MoveOutcome::Blocked { obstacle: 0 });
        assert_eq!(camera.position, airborne);
    }

    #[test]
    fn jump_is_ignored_in_free_flight() {
        let mut controller = free_flight(vec![]);
        assert!(!controller.jump());
    }
}
