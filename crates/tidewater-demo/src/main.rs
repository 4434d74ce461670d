//! Headless Tidewater demo.
//!
//! Loads `config.ron` (created with defaults on first run), applies CLI
//! overrides, and simulates a camera bobbing through the waterline on a
//! fixed-timestep loop while logging each underwater transition.
//!
//! Run with `cargo run -p tidewater-demo -- --seconds 20 --log-level debug`.

mod scene;
mod sim_loop;

use clap::Parser;
use tidewater_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

use crate::scene::DemoScene;
use crate::sim_loop::FixedStepLoop;

/// Simulated render frame length; deliberately not a multiple of the fixed step.
const FRAME_TIME: f64 = 1.0 / 45.0;

fn main() {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map(Ok).unwrap_or_else(default_config_dir) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    tidewater_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        "Waterline band: enter below {:.2}, exit above {:.2}",
        config.underwater.enter_y, config.underwater.exit_y
    );

    let mut scene = match DemoScene::new(&config) {
        Ok(scene) => scene,
        Err(e) => {
            error!("Invalid underwater settings: {e}");
            std::process::exit(1);
        }
    };

    let mut sim = FixedStepLoop::new();
    while sim.total_sim_time() < f64::from(args.seconds) {
        sim.frame(FRAME_TIME, |dt, t| scene.step(dt, t));
    }
    scene.finish();

    let (surface_weight, underwater_weight) = scene.applied_weights();
    let (axis, angle) = scene.helmet().to_axis_angle();
    info!(
        steps = sim.update_count(),
        transitions = scene.transitions(),
        drags = scene.drags_started(),
        underwater = scene.controller().is_underwater(),
        "Simulation finished"
    );
    if let Some(fog) = scene.applied_fog() {
        info!(
            "Final fog {:.1}..{:.1} density {:.4}",
            fog.start, fog.end, fog.density
        );
    }
    info!("Final volumes surface={surface_weight:.2} underwater={underwater_weight:.2}");
    info!(
        "Helmet turned {:.1} degrees about ({:.2}, {:.2}, {:.2})",
        angle.to_degrees(),
        axis.x,
        axis.y,
        axis.z
    );
    if scene.panels().exit_requested() {
        info!("Exiting");
    }
}
