// cli.rs - Command-line interface for the headless camera demo
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "free-camera")]
#[command(about = "Drives a free camera toward a target pose", long_about = None)]
pub struct Cli {
    /// TOML camera configuration; defaults are used when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of simulated frames
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Simulated frame time in seconds
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub frame_time: f32,

    /// Fixed camera tick rate; frames are fed straight through when omitted
    #[arg(long)]
    pub tick_hz: Option<f32>,

    /// Target yaw, pitch and roll in degrees
    #[arg(
        long,
        num_args = 3,
        value_names = ["YAW", "PITCH", "ROLL"],
        allow_negative_numbers = true
    )]
    pub rotate: Option<Vec<f32>>,

    /// Target position in world space
    #[arg(
        long = "move",
        num_args = 3,
        value_names = ["X", "Y", "Z"],
        allow_negative_numbers = true
    )]
    pub move_to: Option<Vec<f32>>,
}
