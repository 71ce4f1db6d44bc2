use clap::Parser;
use glam::Vec3;

use free_camera::cli::Cli;
use free_camera::core::FixedStep;
use free_camera::traits::{Camera, Movable, Placeable, Rotatable, Updateable};
use free_camera::types::CameraUniform;
use free_camera::{CameraConfig, QuaternionCamera};

// === Type Aliases ===

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn vec3_arg(values: &[f32]) -> Vec3 {
    Vec3::new(values[0], values[1], values[2])
}

fn report(camera: &QuaternionCamera) {
    log::info!("position  {:?}", camera.position());
    log::info!("target    {:?}", camera.target_position());
    log::info!(
        "angles    yaw {:.3} pitch {:.3} roll {:.3}",
        camera.yaw(),
        camera.pitch(),
        camera.roll()
    );
    log::info!(
        "targets   yaw {:.3} pitch {:.3} roll {:.3}",
        camera.target_yaw(),
        camera.target_pitch(),
        camera.target_roll()
    );
    log::info!("direction {:?}", camera.direction());

    let uniform = CameraUniform::from_camera(camera);
    for row in camera.view_matrix().transpose().to_cols_array_2d() {
        println!("{:>10.4} {:>10.4} {:>10.4} {:>10.4}", row[0], row[1], row[2], row[3]);
    }
    log::debug!("uniform bytes: {}", bytemuck::bytes_of(&uniform).len());
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CameraConfig::load(path)?,
        None => CameraConfig::default(),
    };
    let mut camera = config.build_camera()?;

    if let Some(angles) = &cli.rotate {
        camera.rotate_absolute(angles[0], angles[1], angles[2]);
    }
    if let Some(position) = &cli.move_to {
        camera.move_absolute(vec3_arg(position));
    }

    let mut fixed = cli.tick_hz.map(|hz| FixedStep::new(hz, 8));
    let mut ticks = 0usize;

    for _ in 0..cli.frames {
        match fixed.as_mut() {
            Some(fixed) => ticks += fixed.drive(cli.frame_time, &mut camera),
            None => {
                camera.try_update(cli.frame_time)?;
                ticks += 1;
            }
        }
    }

    if ticks == 0 {
        // Nothing ran, but the view should still reflect any requests
        camera.update(0.0);
    }

    log::info!("{} frames, {} camera ticks", cli.frames, ticks);
    report(&camera);

    Ok(())
}
