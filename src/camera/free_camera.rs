use glam::{Mat4, Vec3};

use super::{
    CameraPose, EulerAngles, MotionState, OrientationStrategy, QuaternionOrientation,
    RotationState,
};
use crate::config::{CameraConfig, DirectionMapping};
use crate::error::CameraError;
use crate::math::{direction_to_yaw_pitch, legacy_secant_yaw_pitch};
use crate::traits::{Camera, Movable, Placeable, Rotatable, Updateable};

/// Free-flying camera: requests move targets, `update` eases the current
/// pose toward them and rebuilds the view matrix
#[derive(Debug, Clone)]
pub struct FreeCamera<S: OrientationStrategy = QuaternionOrientation> {
    strategy: S,
    pose: CameraPose<S::Orientation>,
    rotation: RotationState,
    motion: MotionState,
    direction_mapping: DirectionMapping,
}

/// Free camera whose orientation is a unit quaternion
pub type QuaternionCamera = FreeCamera<QuaternionOrientation>;

impl QuaternionCamera {
    pub fn new(config: &CameraConfig) -> Result<Self, CameraError> {
        Self::with_strategy(QuaternionOrientation, config)
    }
}

impl Default for QuaternionCamera {
    fn default() -> Self {
        let config = CameraConfig::default();
        Self::from_angles(QuaternionOrientation, &config, EulerAngles::ZERO)
    }
}

impl<S: OrientationStrategy> FreeCamera<S> {
    /// Build a camera at `config.position` facing `config.facing`
    pub fn with_strategy(strategy: S, config: &CameraConfig) -> Result<Self, CameraError> {
        let (yaw, pitch) = direction_to_yaw_pitch(config.facing)?;
        Ok(Self::from_angles(
            strategy,
            config,
            EulerAngles::new(yaw, pitch, 0.0),
        ))
    }

    fn from_angles(strategy: S, config: &CameraConfig, angles: EulerAngles) -> Self {
        let orientation = strategy.compose(angles);
        let basis = strategy.basis(&orientation);
        let pose = CameraPose::new(config.position, orientation, basis);

        log::debug!(
            "Camera created at {:?} facing {:?} (yaw {:.2}, pitch {:.2})",
            config.position,
            pose.direction(),
            angles.yaw,
            angles.pitch
        );

        Self {
            strategy,
            pose,
            rotation: RotationState::new(angles, config.rotation_speed, config.rotation_step),
            motion: MotionState::new(config.position, config.acceleration, config.motion),
            direction_mapping: config.direction_mapping,
        }
    }

    /// Validating form of `update`: rejects negative and non-finite deltas
    /// and leaves the camera untouched when it does
    pub fn try_update(&mut self, delta: f32) -> Result<(), CameraError> {
        if !delta.is_finite() || delta < 0.0 {
            log::warn!("Rejected camera update with delta {}", delta);
            return Err(CameraError::InvalidDelta(delta));
        }
        self.update(delta);
        Ok(())
    }

    /// Recompose the orientation from the current angles and refresh the
    /// basis, direction and view matrix
    pub fn rebuild_view(&mut self) {
        let orientation = self.strategy.compose(self.rotation.current());
        let basis = self.strategy.basis(&orientation);
        self.pose.rebuild(orientation, basis);
    }

    pub fn orientation(&self) -> S::Orientation {
        self.pose.orientation()
    }

    pub fn pose(&self) -> &CameraPose<S::Orientation> {
        &self.pose
    }

    pub fn rotation_state(&self) -> &RotationState {
        &self.rotation
    }

    pub fn motion_state(&self) -> &MotionState {
        &self.motion
    }

    pub fn direction_mapping(&self) -> DirectionMapping {
        self.direction_mapping
    }

    pub fn set_direction_mapping(&mut self, mapping: DirectionMapping) {
        self.direction_mapping = mapping;
    }

    fn local_offset(&self, offset: Vec3) -> Vec3 {
        let basis = self.pose.basis();
        basis.x * offset.x + basis.y * offset.y + basis.z * offset.z
    }

    fn angles_towards(&self, direction: Vec3, roll: f32) -> Result<EulerAngles, CameraError> {
        let angles = match self.direction_mapping {
            DirectionMapping::Euler => direction_to_yaw_pitch(direction),
            DirectionMapping::LegacySecant => legacy_secant_yaw_pitch(direction),
        };
        let (yaw, pitch) = angles.inspect_err(|err| {
            log::warn!("Rejected rotation request: {}", err);
        })?;
        Ok(EulerAngles::new(yaw, pitch, roll))
    }

    fn jump_to(&mut self, position: Vec3) {
        self.pose.position = position;
        self.motion.settle_at(position);
        log::debug!("Camera jumped to {:?}", position);
    }
}

impl<S: OrientationStrategy> Updateable for FreeCamera<S> {
    /// Position first, then angles, then the derived view. The delta is not
    /// checked; see `try_update`.
    fn update(&mut self, delta: f32) {
        self.motion.advance(&mut self.pose.position, delta);
        self.rotation.advance(delta);
        self.rebuild_view();

        log::trace!(
            "Camera tick {:.4}s: position {:?}, angles {:?}",
            delta,
            self.pose.position(),
            self.rotation.current()
        );
    }
}

impl<S: OrientationStrategy> Placeable for FreeCamera<S> {
    fn position(&self) -> Vec3 {
        self.pose.position()
    }

    fn direction(&self) -> Vec3 {
        self.pose.direction()
    }
}

impl<S: OrientationStrategy> Camera for FreeCamera<S> {
    fn view_matrix(&self) -> Mat4 {
        self.pose.view_matrix()
    }
}

impl<S: OrientationStrategy> Movable for FreeCamera<S> {
    fn move_relative(&mut self, offset: Vec3) {
        let offset = self.local_offset(offset);
        self.motion.offset_target(offset);
    }

    fn move_along(&mut self, direction: Vec3, amount: Vec3) {
        self.motion.offset_target(direction * amount);
    }

    fn move_absolute(&mut self, position: Vec3) {
        self.motion.set_target(position);
    }

    fn move_relative_immediate(&mut self, offset: Vec3) {
        let position = self.pose.position() + self.local_offset(offset);
        self.jump_to(position);
    }

    fn move_along_immediate(&mut self, direction: Vec3, amount: Vec3) {
        let position = self.pose.position() + direction * amount;
        self.jump_to(position);
    }

    fn move_absolute_immediate(&mut self, position: Vec3) {
        self.jump_to(position);
    }

    fn target_position(&self) -> Vec3 {
        self.motion.target_position()
    }

    fn velocity(&self) -> Vec3 {
        self.motion.velocity()
    }

    fn acceleration(&self) -> Vec3 {
        self.motion.acceleration()
    }

    fn set_acceleration(&mut self, acceleration: Vec3) {
        self.motion.set_acceleration(acceleration);
    }
}

impl<S: OrientationStrategy> Rotatable for FreeCamera<S> {
    fn rotate(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.rotation.offset_target(yaw, pitch, roll);
    }

    fn rotate_immediate(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.rotation.offset_immediate(yaw, pitch, roll);
    }

    fn rotate_absolute(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.rotation.set_target(EulerAngles::new(yaw, pitch, roll));
    }

    fn rotate_absolute_immediate(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.rotation.set_immediate(EulerAngles::new(yaw, pitch, roll));
    }

    fn rotate_towards(&mut self, direction: Vec3, roll: f32) -> Result<(), CameraError> {
        let angles = self.angles_towards(direction, roll)?;
        self.rotation.set_target(angles);
        Ok(())
    }

    fn rotate_towards_immediate(&mut self, direction: Vec3, roll: f32) -> Result<(), CameraError> {
        let angles = self.angles_towards(direction, roll)?;
        self.rotation.set_immediate(angles);
        log::debug!("Camera snapped to {:?}", angles);
        Ok(())
    }

    fn yaw(&self) -> f32 {
        self.rotation.current().yaw
    }

    fn pitch(&self) -> f32 {
        self.rotation.current().pitch
    }

    fn roll(&self) -> f32 {
        self.rotation.current().roll
    }

    fn target_yaw(&self) -> f32 {
        self.rotation.target().yaw
    }

    fn target_pitch(&self) -> f32 {
        self.rotation.target().pitch
    }

    fn target_roll(&self) -> f32 {
        self.rotation.target().roll
    }

    fn axis_x(&self) -> Vec3 {
        self.pose.basis().x
    }

    fn axis_y(&self) -> Vec3 {
        self.pose.basis().y
    }

    fn axis_z(&self) -> Vec3 {
        self.pose.basis().z
    }

    fn rotation_speed(&self) -> Vec3 {
        self.rotation.speed()
    }

    fn set_rotation_speed(&mut self, speed: Vec3) {
        self.rotation.set_speed(speed);
    }
}
