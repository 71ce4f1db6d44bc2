use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Yaw, pitch and roll in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl EulerAngles {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }
}

/// How far an axis may travel in one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationStep {
    /// `speed * delta * delta`. Approach rate depends on frame time squared.
    #[default]
    Quadratic,
    /// `speed * delta`. Degrees per second regardless of frame rate.
    Linear,
}

impl RotationStep {
    pub fn distance(self, speed: f32, delta: f32) -> f32 {
        match self {
            RotationStep::Quadratic => speed * delta * delta,
            RotationStep::Linear => speed * delta,
        }
    }
}

/// Current and target angles plus the per-axis rate that closes the gap
#[derive(Debug, Clone)]
pub struct RotationState {
    current: EulerAngles,
    target: EulerAngles,
    speed: Vec3,
    step: RotationStep,
}

impl RotationState {
    pub fn new(angles: EulerAngles, speed: Vec3, step: RotationStep) -> Self {
        Self {
            current: angles,
            target: angles,
            speed,
            step,
        }
    }

    pub fn current(&self) -> EulerAngles {
        self.current
    }

    pub fn target(&self) -> EulerAngles {
        self.target
    }

    /// Degrees per second: x drives pitch, y drives yaw, z drives roll
    pub fn speed(&self) -> Vec3 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Vec3) {
        self.speed = speed;
    }

    pub fn step_mode(&self) -> RotationStep {
        self.step
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    pub fn offset_target(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.target.yaw += yaw;
        self.target.pitch += pitch;
        self.target.roll += roll;
    }

    pub fn set_target(&mut self, angles: EulerAngles) {
        self.target = angles;
    }

    pub fn offset_immediate(&mut self, yaw: f32, pitch: f32, roll: f32) {
        self.current.yaw += yaw;
        self.current.pitch += pitch;
        self.current.roll += roll;
        self.target = self.current;
    }

    pub fn set_immediate(&mut self, angles: EulerAngles) {
        self.current = angles;
        self.target = angles;
    }

    /// Move each current angle toward its target without passing it
    pub fn advance(&mut self, delta: f32) {
        let step = self.step;
        self.current.yaw = approach(
            self.current.yaw,
            self.target.yaw,
            step.distance(self.speed.y, delta),
        );
        self.current.pitch = approach(
            self.current.pitch,
            self.target.pitch,
            step.distance(self.speed.x, delta),
        );
        self.current.roll = approach(
            self.current.roll,
            self.target.roll,
            step.distance(self.speed.z, delta),
        );
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new(EulerAngles::ZERO, Vec3::splat(20.0), RotationStep::default())
    }
}

/// One clamped step from `current` toward `target`. A NaN step is carried
/// into the result rather than swallowed by the clamp.
fn approach(current: f32, target: f32, step: f32) -> f32 {
    if current < target {
        let next = current + step;
        if next > target { target } else { next }
    } else if current > target {
        let next = current - step;
        if next < target { target } else { next }
    } else {
        current
    }
}
