use free_camera::camera::RotationStep;
use free_camera::traits::{Camera, Rotatable, Updateable};
use free_camera::{CameraConfig, QuaternionCamera};
use glam::Vec3;

#[cfg(test)]
mod rotation_interpolation_tests {
    use super::*;

    #[test]
    fn test_first_tick_moves_yaw_by_speed_delta_squared() {
        let mut camera = QuaternionCamera::default();
        camera.rotate_absolute(90.0, 0.0, 0.0);

        camera.update(0.1);

        assert!(
            (camera.yaw() - 0.2).abs() < 1e-5,
            "Expected 20 * 0.1 * 0.1, got {}",
            camera.yaw()
        );
        assert_eq!(camera.pitch(), 0.0);
        assert_eq!(camera.roll(), 0.0);
    }

    #[test]
    fn test_yaw_saturates_exactly_at_target() {
        let mut camera = QuaternionCamera::default();
        camera.rotate_absolute(90.0, 0.0, 0.0);

        let mut previous = camera.yaw();
        let mut ticks = 0;
        while camera.yaw() != 90.0 {
            camera.update(0.1);
            assert!(camera.yaw() >= previous, "Yaw must not move backwards");
            assert!(camera.yaw() <= 90.0, "Yaw must not overshoot");
            previous = camera.yaw();
            ticks += 1;
            assert!(ticks < 1000, "Yaw never reached its target");
        }

        for _ in 0..10 {
            camera.update(0.1);
            assert_eq!(camera.yaw(), 90.0);
        }
    }

    #[test]
    fn test_every_axis_approaches_monotonically() {
        let mut camera = QuaternionCamera::default();
        camera.rotate_absolute_immediate(10.0, 10.0, 10.0);
        camera.rotate_absolute(-15.0, 40.0, 10.5);

        let mut previous = (camera.yaw(), camera.pitch(), camera.roll());
        for _ in 0..5000 {
            camera.update(0.05);
            let current = (camera.yaw(), camera.pitch(), camera.roll());

            assert!(current.0 <= previous.0 && current.0 >= -15.0);
            assert!(current.1 >= previous.1 && current.1 <= 40.0);
            assert!(current.2 >= previous.2 && current.2 <= 10.5);
            previous = current;
        }

        assert_eq!(previous, (-15.0, 40.0, 10.5));
    }

    #[test]
    fn test_deferred_requests_only_touch_targets() {
        let mut camera = QuaternionCamera::default();
        let view_before = camera.view_matrix();

        camera.rotate(30.0, 5.0, 0.0);
        camera.rotate_absolute(45.0, -10.0, 3.0);
        camera.rotate(5.0, 0.0, 0.0);
        camera.rotate_towards(Vec3::new(1.0, 0.0, -1.0), 2.0).unwrap();
        camera.rotate(1.0, 1.0, 1.0);

        assert_eq!(camera.yaw(), 0.0);
        assert_eq!(camera.pitch(), 0.0);
        assert_eq!(camera.roll(), 0.0);
        assert_eq!(camera.view_matrix(), view_before);
        assert!((camera.target_yaw() - (-44.0)).abs() < 1e-3);
        assert!((camera.target_pitch() - 1.0).abs() < 1e-3);
        assert_eq!(camera.target_roll(), 3.0);
    }

    #[test]
    fn test_absolute_immediate_has_no_delay() {
        let mut camera = QuaternionCamera::default();
        camera.rotate_absolute(5.0, 5.0, 5.0);

        camera.rotate_absolute_immediate(12.0, -34.0, 56.0);
        camera.rebuild_view();

        assert_eq!((camera.yaw(), camera.pitch(), camera.roll()), (12.0, -34.0, 56.0));
        assert_eq!(
            (camera.target_yaw(), camera.target_pitch(), camera.target_roll()),
            (12.0, -34.0, 56.0)
        );

        camera.update(0.1);
        assert_eq!((camera.yaw(), camera.pitch(), camera.roll()), (12.0, -34.0, 56.0));
    }

    #[test]
    fn test_relative_immediate_accumulates() {
        let mut camera = QuaternionCamera::default();
        camera.rotate_immediate(10.0, 0.0, 0.0);
        camera.rotate_immediate(10.0, -5.0, 0.0);

        assert_eq!(camera.yaw(), 20.0);
        assert_eq!(camera.pitch(), -5.0);
        assert_eq!(camera.target_yaw(), 20.0);
    }

    #[test]
    fn test_later_request_overrides_pending_target() {
        let mut camera = QuaternionCamera::default();
        camera.rotate_absolute(90.0, 0.0, 0.0);
        camera.update(0.1);
        camera.rotate_absolute(-90.0, 0.0, 0.0);

        camera.update(0.1);

        assert!(camera.yaw().abs() < 1e-5, "Yaw should head back toward -90");
    }

    #[test]
    fn test_rotation_speed_is_per_axis() {
        let mut camera = QuaternionCamera::default();
        camera.set_rotation_speed(Vec3::new(100.0, 0.0, 50.0));
        camera.rotate_absolute(90.0, 90.0, 90.0);

        camera.update(0.1);

        assert_eq!(camera.yaw(), 0.0);
        assert!((camera.pitch() - 1.0).abs() < 1e-5);
        assert!((camera.roll() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_linear_step_is_frame_rate_independent() {
        let config = CameraConfig {
            rotation_step: RotationStep::Linear,
            ..CameraConfig::default()
        };
        let mut coarse = QuaternionCamera::new(&config).unwrap();
        let mut fine = QuaternionCamera::new(&config).unwrap();
        coarse.rotate_absolute(90.0, 0.0, 0.0);
        fine.rotate_absolute(90.0, 0.0, 0.0);

        for _ in 0..10 {
            coarse.update(0.1);
        }
        for _ in 0..100 {
            fine.update(0.01);
        }

        assert!((coarse.yaw() - 20.0).abs() < 1e-3);
        assert!((fine.yaw() - 20.0).abs() < 1e-3);
    }
}
