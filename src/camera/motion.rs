use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How `update` carries the position toward the target position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionLaw {
    /// Position only changes through immediate requests; velocity stays zero
    #[default]
    Hold,
    /// Accelerate toward the target per axis, braking so the target is
    /// reached without overshoot
    Seek,
}

/// Target position, velocity and acceleration
#[derive(Debug, Clone)]
pub struct MotionState {
    target_position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    law: MotionLaw,
}

impl MotionState {
    pub fn new(position: Vec3, acceleration: Vec3, law: MotionLaw) -> Self {
        Self {
            target_position: position,
            velocity: Vec3::ZERO,
            acceleration,
            law,
        }
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    pub fn set_acceleration(&mut self, acceleration: Vec3) {
        self.acceleration = acceleration;
    }

    pub fn law(&self) -> MotionLaw {
        self.law
    }

    pub fn offset_target(&mut self, offset: Vec3) {
        self.target_position += offset;
    }

    pub fn set_target(&mut self, position: Vec3) {
        self.target_position = position;
    }

    /// Pin the target to `position` and drop any motion in flight
    pub fn settle_at(&mut self, position: Vec3) {
        self.target_position = position;
        self.velocity = Vec3::ZERO;
    }

    /// Carry `position` toward the target for `delta` seconds
    pub fn advance(&mut self, position: &mut Vec3, delta: f32) {
        match self.law {
            MotionLaw::Hold => {}
            MotionLaw::Seek => {
                let mut pos = position.to_array();
                let mut vel = self.velocity.to_array();
                let target = self.target_position.to_array();
                let accel = self.acceleration.to_array();

                for axis in 0..3 {
                    (pos[axis], vel[axis]) =
                        seek_axis(pos[axis], target[axis], vel[axis], accel[axis], delta);
                }

                *position = Vec3::from_array(pos);
                self.velocity = Vec3::from_array(vel);
            }
        }
    }
}

/// Accelerate toward `target`, capping speed at what can still brake to a
/// stop over the remaining distance. Returns the new position and velocity.
fn seek_axis(
    position: f32,
    target: f32,
    velocity: f32,
    acceleration: f32,
    delta: f32,
) -> (f32, f32) {
    let offset = target - position;
    if offset == 0.0 || acceleration <= 0.0 {
        return (position, 0.0);
    }

    let heading = offset.signum();
    let distance = offset.abs();
    let stopping_speed = (2.0 * acceleration * distance).sqrt();

    // Velocity pointing away from the target is discarded
    let speed = ((velocity * heading).max(0.0) + acceleration * delta).min(stopping_speed);
    let travel = speed * delta;

    if travel >= distance {
        (target, 0.0)
    } else {
        (position + heading * travel, heading * speed)
    }
}
