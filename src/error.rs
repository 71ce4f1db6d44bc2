use std::path::PathBuf;

/// Errors raised by camera requests that validate their input
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CameraError {
    #[error("degenerate direction vector ({x}, {y}, {z})")]
    DegenerateDirection { x: f32, y: f32, z: f32 },

    #[error("invalid update delta: {0}")]
    InvalidDelta(f32),
}

/// Errors raised while loading a camera configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid camera setup: {0}")]
    Camera(#[from] CameraError),
}
