use glam::Mat4;

use super::{Placeable, Updateable};

/// Camera abstraction consumed by renderers
pub trait Camera: Placeable + Updateable {
    /// World-to-camera transform as of the last update
    fn view_matrix(&self) -> Mat4;
}
