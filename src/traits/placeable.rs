use glam::Vec3;

/// Anything with a world-space location and facing
pub trait Placeable {
    /// World-space position
    fn position(&self) -> Vec3;

    /// World-space unit facing direction
    fn direction(&self) -> Vec3;
}
