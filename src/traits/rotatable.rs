use glam::Vec3;

use super::{Placeable, Updateable};
use crate::error::CameraError;

/// Orientation requests in degrees.
///
/// Deferred requests only change the target angles; immediate requests set
/// current and target together. Angles are unbounded and never wrapped.
pub trait Rotatable: Placeable + Updateable {
    /// Offset the target angles
    fn rotate(&mut self, yaw: f32, pitch: f32, roll: f32);

    /// Offset the current angles right now
    fn rotate_immediate(&mut self, yaw: f32, pitch: f32, roll: f32);

    /// Replace the target angles
    fn rotate_absolute(&mut self, yaw: f32, pitch: f32, roll: f32);

    /// Replace the current angles right now
    fn rotate_absolute_immediate(&mut self, yaw: f32, pitch: f32, roll: f32);

    /// Aim the target angles along `direction` with the given roll
    fn rotate_towards(&mut self, direction: Vec3, roll: f32) -> Result<(), CameraError>;

    /// Aim along `direction` right now with the given roll
    fn rotate_towards_immediate(&mut self, direction: Vec3, roll: f32) -> Result<(), CameraError>;

    fn yaw(&self) -> f32;
    fn pitch(&self) -> f32;
    fn roll(&self) -> f32;

    fn target_yaw(&self) -> f32;
    fn target_pitch(&self) -> f32;
    fn target_roll(&self) -> f32;

    /// Camera right axis in world space
    fn axis_x(&self) -> Vec3;
    /// Camera up axis in world space
    fn axis_y(&self) -> Vec3;
    /// Camera forward axis in world space, opposite the facing direction
    fn axis_z(&self) -> Vec3;

    /// Degrees per second for (pitch, yaw, roll) on (x, y, z)
    fn rotation_speed(&self) -> Vec3;

    fn set_rotation_speed(&mut self, speed: Vec3);
}
