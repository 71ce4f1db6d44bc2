use std::fmt::Debug;

use glam::{Quat, Vec3};

use super::EulerAngles;
use crate::math::Basis;

/// Turns absolute yaw/pitch/roll into an orientation and an orientation into
/// a camera basis. The pose and interpolation logic is shared; camera
/// variants differ only here.
pub trait OrientationStrategy {
    type Orientation: Copy + Debug + PartialEq;

    fn identity(&self) -> Self::Orientation;

    /// Build an orientation from absolute angles in degrees
    fn compose(&self, angles: EulerAngles) -> Self::Orientation;

    /// Right/up/forward axes of `orientation` in world space
    fn basis(&self, orientation: &Self::Orientation) -> Basis;
}

/// Yaw about world Y, then pitch about world -X, then roll about world Z,
/// rebuilt from scratch every time so nothing accumulates
#[derive(Debug, Clone, Copy, Default)]
pub struct QuaternionOrientation;

impl OrientationStrategy for QuaternionOrientation {
    type Orientation = Quat;

    fn identity(&self) -> Quat {
        Quat::IDENTITY
    }

    fn compose(&self, angles: EulerAngles) -> Quat {
        let yaw = Quat::from_axis_angle(Vec3::Y, angles.yaw.to_radians());
        let pitch = Quat::from_axis_angle(Vec3::NEG_X, angles.pitch.to_radians());
        let roll = Quat::from_axis_angle(Vec3::Z, angles.roll.to_radians());

        (Quat::IDENTITY * yaw * pitch * roll).normalize()
    }

    fn basis(&self, orientation: &Quat) -> Basis {
        Basis::from_quat(*orientation)
    }
}
