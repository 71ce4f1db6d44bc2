use glam::{Mat3, Mat4, Quat, Vec3, Vec4};

/// Camera-local right/up/forward axes expressed in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub x: Vec3,
    pub y: Vec3,
    pub z: Vec3,
}

impl Basis {
    pub const IDENTITY: Self = Self {
        x: Vec3::X,
        y: Vec3::Y,
        z: Vec3::Z,
    };

    pub fn new(x: Vec3, y: Vec3, z: Vec3) -> Self {
        Self { x, y, z }
    }

    /// Columns of the rotation matrix of `orientation`
    pub fn from_quat(orientation: Quat) -> Self {
        let rotation = Mat3::from_quat(orientation);
        Self {
            x: rotation.x_axis,
            y: rotation.y_axis,
            z: rotation.z_axis,
        }
    }

    /// Facing direction, the negated forward axis
    pub fn direction(&self) -> Vec3 {
        -self.z
    }

    /// World-to-camera transform for a camera standing at `position`.
    ///
    /// The rotation block is the transpose of the basis matrix, so each row
    /// holds one axis, and the translation is `-dot(axis, position)` per axis.
    pub fn view_matrix(&self, position: Vec3) -> Mat4 {
        Mat4::from_cols(
            Vec4::new(self.x.x, self.y.x, self.z.x, 0.0),
            Vec4::new(self.x.y, self.y.y, self.z.y, 0.0),
            Vec4::new(self.x.z, self.y.z, self.z.z, 0.0),
            Vec4::new(
                -self.x.dot(position),
                -self.y.dot(position),
                -self.z.dot(position),
                1.0,
            ),
        )
    }

    /// Unit-length, mutually orthogonal axes within `tolerance`
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let unit = [self.x, self.y, self.z]
            .iter()
            .all(|axis| (axis.length() - 1.0).abs() < tolerance);

        unit && self.x.dot(self.y).abs() < tolerance
            && self.y.dot(self.z).abs() < tolerance
            && self.z.dot(self.x).abs() < tolerance
    }
}

impl Default for Basis {
    fn default() -> Self {
        Self::IDENTITY
    }
}
