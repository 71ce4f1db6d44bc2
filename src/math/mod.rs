mod angles;
mod basis;

pub use angles::{direction_to_yaw_pitch, legacy_secant_yaw_pitch, normalize_direction};
pub use basis::Basis;
