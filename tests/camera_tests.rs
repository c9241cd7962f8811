use glam::Vec3;
use sorting_center::camera::{Camera, MAX_ZOOM, MIN_ZOOM, PITCH_LIMIT};

const EPS: f32 = 1e-4;

fn assert_orthonormal(camera: &Camera) {
    let (f, r, u) = (camera.front(), camera.right(), camera.up());
    assert!((f.length() - 1.0).abs() < EPS, "front not unit: {f:?}");
    assert!((r.length() - 1.0).abs() < EPS, "right not unit: {r:?}");
    assert!((u.length() - 1.0).abs() < EPS, "up not unit: {u:?}");
    assert!(f.dot(r).abs() < EPS);
    assert!(f.dot(u).abs() < EPS);
    assert!(r.dot(u).abs() < EPS);
    // right-handed: right x up points back along -front
    assert!(r.cross(u).abs_diff_eq(-f, EPS), "left-handed basis: {f:?} {r:?} {u:?}");
    assert!(u.dot(camera.world_up()) > 0.0);
}

#[cfg(test)]
mod camera_tests {
    use super::*;

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(camera.right().abs_diff_eq(Vec3::X, EPS));
        assert!(camera.up().abs_diff_eq(Vec3::Y, EPS));
        assert_eq!(camera.zoom(), 45.0);
    }

    #[test]
    fn test_basis_is_orthonormal_across_angles() {
        for yaw in (-360..=360).step_by(30) {
            for pitch in (-89..=89).step_by(11) {
                let camera = Camera::new(Vec3::ZERO, Vec3::Y, yaw as f32, pitch as f32);
                assert_orthonormal(&camera);
            }
        }
    }

    #[test]
    fn test_right_stays_horizontal() {
        let mut camera = Camera::default();
        for _ in 0..50 {
            camera.process_mouse_movement(37.0, 13.0, true);
            assert!(camera.right().y.abs() < EPS, "roll crept in: {:?}", camera.right());
        }
    }

    #[test]
    fn test_pitch_is_clamped_when_constrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 10_000.0, true);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
        assert_orthonormal(&camera);

        camera.process_mouse_movement(0.0, -20_000.0, true);
        assert_eq!(camera.pitch(), -PITCH_LIMIT);
        assert_orthonormal(&camera);
    }

    #[test]
    fn test_pitch_is_free_when_unconstrained() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(0.0, 1000.0, false);
        assert_eq!(camera.pitch(), 100.0);
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut camera = Camera::default();
        camera.process_mouse_movement(7200.0, 0.0, true);
        assert!((camera.yaw() - 630.0).abs() < EPS);
        assert!(camera.front().abs_diff_eq(Vec3::NEG_Z, EPS));
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut camera = Camera::default();
        camera.process_mouse_scroll(-10.0);
        assert_eq!(camera.zoom(), MAX_ZOOM);

        camera.process_mouse_scroll(20.0);
        assert_eq!(camera.zoom(), 25.0);

        camera.process_mouse_scroll(100.0);
        assert_eq!(camera.zoom(), MIN_ZOOM);
    }

    #[test]
    fn test_zero_pointer_delta_is_idempotent() {
        let mut camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 20.0, -15.0);
        let before = (camera.front(), camera.right(), camera.up());
        camera.process_mouse_movement(0.0, 0.0, true);
        assert_eq!((camera.front(), camera.right(), camera.up()), before);
        assert_eq!((camera.yaw(), camera.pitch()), (20.0, -15.0));

        camera.process_mouse_scroll(12.0);
        let zoom = camera.zoom();
        camera.process_mouse_scroll(0.0);
        assert_eq!(camera.zoom(), zoom);
    }

    #[test]
    fn test_view_matrix_maps_target_onto_negative_z() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 0.0, 0.0);
        let ahead = camera.position + camera.front() * 5.0;
        let in_view = camera.view_matrix().transform_point3(ahead);
        assert!(in_view.abs_diff_eq(Vec3::new(0.0, 0.0, -5.0), EPS));
    }

    #[test]
    fn test_mouse_sensitivity_scales_look() {
        let mut camera = Camera::default();
        camera.mouse_sensitivity = 0.5;
        camera.process_mouse_movement(10.0, 4.0, true);
        assert!((camera.yaw() - (-85.0)).abs() < EPS);
        assert!((camera.pitch() - 2.0).abs() < EPS);
    }
}
