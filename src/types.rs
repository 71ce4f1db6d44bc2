use crate::traits::Camera;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub position: [f32; 3],
    pub _pad1: f32,
    pub direction: [f32; 3],
    pub _pad2: f32,
}

impl CameraUniform {
    /// Snapshot a camera after its update for upload
    pub fn from_camera(camera: &dyn Camera) -> Self {
        Self {
            view: camera.view_matrix().to_cols_array_2d(),
            position: camera.position().to_array(),
            _pad1: 0.0,
            direction: camera.direction().to_array(),
            _pad2: 0.0,
        }
    }
}
