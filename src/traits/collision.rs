use glam::Vec3;

use crate::core::collision::Obstacle;

/// Obstacle test strategy used by the motion controller
pub trait CollisionTest {
    /// Index of the first obstacle, in slice order, that a body placed at
    /// `candidate` would overlap. Stops scanning at the first hit.
    fn first_hit(&self, candidate: Vec3, obstacles: &[Obstacle]) -> Option<usize>;

    /// Short label for logs
    fn name(&self) -> &'static str;
}
