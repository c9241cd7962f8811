use glam::Mat4;

use crate::traits::CameraView;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// Per-frame camera uniform handed to the renderer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub time: f32, // Belt texture scroll time
}

impl ViewUniform {
    pub fn new(camera: &impl CameraView, aspect_ratio: f32, time: f32) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            projection: projection(camera.zoom(), aspect_ratio).to_cols_array_2d(),
            position: camera.position().to_array(),
            time,
        }
    }
}

/// Right-handed perspective with the camera zoom as vertical fov (degrees)
pub fn projection(zoom_degrees: f32, aspect_ratio: f32) -> Mat4 {
    Mat4::perspective_rh(zoom_degrees.to_radians(), aspect_ratio, NEAR_PLANE, FAR_PLANE)
}

pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use glam::Vec3;

    #[test]
    fn uniform_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<ViewUniform>(), 2 * 64 + 16);
        let uniform = ViewUniform::new(&Camera::default(), 4.0 / 3.0, 0.0);
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 144);
    }

    #[test]
    fn uniform_carries_camera_state() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, -90.0, 0.0);
        let uniform = ViewUniform::new(&camera, 1.0, 0.5);
        assert_eq!(uniform.position, [1.0, 2.0, 3.0]);
        assert_eq!(uniform.view, camera.view_matrix().to_cols_array_2d());
        assert_eq!(uniform.time, 0.5);
    }

    #[test]
    fn narrower_zoom_magnifies() {
        let wide = projection(45.0, 1.0);
        let narrow = projection(10.0, 1.0);
        assert!(narrow.x_axis.x > wide.x_axis.x);
    }

    #[test]
    fn aspect_ratio_guards_zero_height() {
        assert_eq!(aspect_ratio(800, 600), 800.0 / 600.0);
        assert_eq!(aspect_ratio(800, 0), 800.0);
    }
}
