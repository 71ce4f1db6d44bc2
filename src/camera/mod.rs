mod free_camera;
mod motion;
mod orientation;
mod pose;
mod rotation;

pub use free_camera::{FreeCamera, QuaternionCamera};
pub use motion::{MotionLaw, MotionState};
pub use orientation::{OrientationStrategy, QuaternionOrientation};
pub use pose::CameraPose;
pub use rotation::{EulerAngles, RotationState, RotationStep};
