use glam::Vec3;

use crate::error::CameraError;

const MIN_DIRECTION_LENGTH: f32 = 1e-6;

/// Normalize a requested facing direction, rejecting zero-length or
/// non-finite input instead of letting NaN reach the pose
pub fn normalize_direction(direction: Vec3) -> Result<Vec3, CameraError> {
    let length = direction.length();
    if !direction.is_finite() || length < MIN_DIRECTION_LENGTH {
        return Err(CameraError::DegenerateDirection {
            x: direction.x,
            y: direction.y,
            z: direction.z,
        });
    }
    Ok(direction / length)
}

/// Yaw and pitch in degrees that turn a camera facing -Z toward `direction`.
///
/// Inverse of the yaw-about-Y then pitch-about-(-X) composition, so
/// `direction = (-cos p sin y, -sin p, -cos p cos y)`. Straight up or down
/// resolves to yaw 0.
pub fn direction_to_yaw_pitch(direction: Vec3) -> Result<(f32, f32), CameraError> {
    let dir = normalize_direction(direction)?;
    let pitch = (-dir.y).clamp(-1.0, 1.0).asin();
    let yaw = if dir.x.abs() < MIN_DIRECTION_LENGTH && dir.z.abs() < MIN_DIRECTION_LENGTH {
        0.0
    } else {
        (-dir.x).atan2(-dir.z)
    };
    Ok((yaw.to_degrees(), pitch.to_degrees()))
}

/// Secant of the direction's projections onto world Z and Y.
///
/// Not a real direction-to-angle conversion: the results always land in
/// [1, 1/cos(1)]. Kept for callers that depend on the old numbers.
pub fn legacy_secant_yaw_pitch(direction: Vec3) -> Result<(f32, f32), CameraError> {
    let dir = normalize_direction(direction)?;
    let yaw = 1.0 / dir.dot(Vec3::Z).cos();
    let pitch = 1.0 / dir.dot(Vec3::Y).cos();
    Ok((yaw, pitch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-4, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_forward_is_zero_rotation() {
        let (yaw, pitch) = direction_to_yaw_pitch(Vec3::NEG_Z).unwrap();
        assert_close(yaw, 0.0);
        assert_close(pitch, 0.0);
    }

    #[test]
    fn test_left_is_positive_yaw() {
        let (yaw, pitch) = direction_to_yaw_pitch(Vec3::NEG_X).unwrap();
        assert_close(yaw, 90.0);
        assert_close(pitch, 0.0);
    }

    #[test]
    fn test_backward_is_half_turn() {
        let (yaw, _) = direction_to_yaw_pitch(Vec3::Z).unwrap();
        assert_close(yaw.abs(), 180.0);
    }

    #[test]
    fn test_down_is_positive_pitch() {
        let (yaw, pitch) = direction_to_yaw_pitch(Vec3::NEG_Y).unwrap();
        assert_close(yaw, 0.0);
        assert_close(pitch, 90.0);
    }

    #[test]
    fn test_unnormalized_input_is_accepted() {
        let (yaw, _) = direction_to_yaw_pitch(Vec3::new(-10.0, 0.0, 0.0)).unwrap();
        assert_close(yaw, 90.0);
    }

    #[test]
    fn test_zero_direction_is_degenerate() {
        let err = direction_to_yaw_pitch(Vec3::ZERO).unwrap_err();
        assert_eq!(
            err,
            CameraError::DegenerateDirection { x: 0.0, y: 0.0, z: 0.0 }
        );
    }

    #[test]
    fn test_nan_direction_is_degenerate() {
        assert!(direction_to_yaw_pitch(Vec3::new(f32::NAN, 0.0, 1.0)).is_err());
        assert!(legacy_secant_yaw_pitch(Vec3::new(0.0, f32::INFINITY, 0.0)).is_err());
    }

    #[test]
    fn test_legacy_secant_values() {
        // dot with Z is -1, dot with Y is 0
        let (yaw, pitch) = legacy_secant_yaw_pitch(Vec3::NEG_Z).unwrap();
        assert_close(yaw, 1.0 / 1f32.cos());
        assert_close(pitch, 1.0);
    }
}
