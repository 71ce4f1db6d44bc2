use glam::Vec3;

use super::{Placeable, Updateable};

/// Position requests.
///
/// Deferred requests only move the target position; the next updates carry
/// the position toward it. Immediate requests move both at once and drop any
/// pending motion.
pub trait Movable: Placeable + Updateable {
    /// Offset the target along the camera's local axes
    fn move_relative(&mut self, offset: Vec3);

    /// Offset the target by `direction * amount`, componentwise, in world space
    fn move_along(&mut self, direction: Vec3, amount: Vec3);

    /// Replace the target position
    fn move_absolute(&mut self, position: Vec3);

    /// Offset the position along the camera's local axes right now
    fn move_relative_immediate(&mut self, offset: Vec3);

    /// Offset the position by `direction * amount`, componentwise, right now
    fn move_along_immediate(&mut self, direction: Vec3, amount: Vec3);

    /// Teleport to `position`
    fn move_absolute_immediate(&mut self, position: Vec3);

    fn target_position(&self) -> Vec3;

    fn velocity(&self) -> Vec3;

    fn acceleration(&self) -> Vec3;

    fn set_acceleration(&mut self, acceleration: Vec3);
}
