use glam::{Mat4, Vec3};

/// Read-only view of a camera, consumed once per frame by the render boundary
pub trait CameraView {
    /// Look-at transform for the current position and orientation
    fn view_matrix(&self) -> Mat4;

    /// Camera position in world space
    fn position(&self) -> Vec3;

    /// Unit look direction
    fn front(&self) -> Vec3;

    /// Vertical field of view in degrees
    fn zoom(&self) -> f32;
}
