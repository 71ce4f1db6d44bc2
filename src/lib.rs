pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod math;
pub mod traits;
pub mod types;

pub use camera::{FreeCamera, QuaternionCamera};
pub use config::CameraConfig;
pub use error::{CameraError, ConfigError};
