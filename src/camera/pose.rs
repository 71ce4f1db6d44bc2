use glam::{Mat4, Vec3};

use crate::math::Basis;

/// Position plus everything derived from the orientation on rebuild
#[derive(Debug, Clone)]
pub struct CameraPose<O> {
    pub(crate) position: Vec3,
    direction: Vec3,
    basis: Basis,
    orientation: O,
    view_matrix: Mat4,
}

impl<O: Copy> CameraPose<O> {
    pub fn new(position: Vec3, orientation: O, basis: Basis) -> Self {
        let mut pose = Self {
            position,
            direction: basis.direction(),
            basis,
            orientation,
            view_matrix: Mat4::IDENTITY,
        };
        pose.rebuild(orientation, basis);
        pose
    }

    /// Adopt a freshly composed orientation and its basis, then refresh the
    /// direction and view matrix from the current position
    pub fn rebuild(&mut self, orientation: O, basis: Basis) {
        self.orientation = orientation;
        self.basis = basis;
        self.direction = basis.direction();
        self.view_matrix = basis.view_matrix(self.position);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn basis(&self) -> Basis {
        self.basis
    }

    pub fn orientation(&self) -> O {
        self.orientation
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view_matrix
    }
}
