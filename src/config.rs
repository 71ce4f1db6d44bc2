// config.rs - Camera construction settings, loadable from TOML
use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{MotionLaw, QuaternionCamera, RotationStep};
use crate::error::ConfigError;

/// How direction-based rotation requests become yaw and pitch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectionMapping {
    /// Proper inverse of the yaw/pitch composition
    #[default]
    Euler,
    /// `1 / cos(dot)` against world Z and Y, for parity with older scenes
    LegacySecant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Initial facing; turned into yaw and pitch at construction
    pub facing: Vec3,
    pub acceleration: Vec3,
    /// Degrees per second: x drives pitch, y drives yaw, z drives roll
    pub rotation_speed: Vec3,
    pub rotation_step: RotationStep,
    pub direction_mapping: DirectionMapping,
    pub motion: MotionLaw,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            facing: Vec3::NEG_Z,
            acceleration: Vec3::splat(2.0),
            rotation_speed: Vec3::splat(20.0),
            rotation_step: RotationStep::Quadratic,
            direction_mapping: DirectionMapping::Euler,
            motion: MotionLaw::Hold,
        }
    }
}

impl CameraConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("Loaded camera config from {}", path.display());
        Ok(config)
    }

    /// Construct the quaternion camera this configuration describes
    pub fn build_camera(&self) -> Result<QuaternionCamera, ConfigError> {
        Ok(QuaternionCamera::new(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = CameraConfig::from_toml_str("").unwrap();
        assert_eq!(config, CameraConfig::default());
    }

    #[test]
    fn test_partial_toml_overrides_fields() {
        let config = CameraConfig::from_toml_str(
            r#"
            position = [1.0, 2.0, 3.0]
            rotation_speed = [10.0, 45.0, 5.0]
            rotation_step = "linear"
            direction_mapping = "legacy_secant"
            motion = "seek"
            "#,
        )
        .unwrap();

        assert_eq!(config.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(config.rotation_speed, Vec3::new(10.0, 45.0, 5.0));
        assert_eq!(config.rotation_step, RotationStep::Linear);
        assert_eq!(config.direction_mapping, DirectionMapping::LegacySecant);
        assert_eq!(config.motion, MotionLaw::Seek);
        assert_eq!(config.facing, Vec3::NEG_Z);
        assert_eq!(config.acceleration, Vec3::splat(2.0));
    }

    #[test]
    fn test_unknown_step_mode_is_parse_error() {
        let err = CameraConfig::from_toml_str("rotation_step = \"cubic\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "facing = [-1.0, 0.0, 0.0]").unwrap();

        let config = CameraConfig::load(file.path()).unwrap();

        assert_eq!(config.facing, Vec3::NEG_X);
    }

    #[test]
    fn test_zero_facing_from_toml_is_camera_error() {
        let config = CameraConfig::from_toml_str("facing = [0.0, 0.0, 0.0]").unwrap();
        let err = config.build_camera().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Camera(crate::error::CameraError::DegenerateDirection { .. })
        ));
    }

    #[test]
    fn test_build_camera_applies_position() {
        let config = CameraConfig::from_toml_str("position = [1.0, 2.0, 3.0]").unwrap();
        let camera = config.build_camera().unwrap();
        assert_eq!(crate::traits::Placeable::position(&camera), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CameraConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
