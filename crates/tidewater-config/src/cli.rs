//! Command-line overrides for the settings in `config.ron`.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Tidewater command-line arguments.
///
/// Values given here win over the loaded config file.
#[derive(Parser, Debug, Default)]
#[command(name = "tidewater", about = "Underwater transition demo")]
pub struct CliArgs {
    /// Height below which the camera goes under.
    #[arg(long, allow_hyphen_values = true)]
    pub enter_y: Option<f32>,

    /// Height above which a submerged camera surfaces.
    #[arg(long, allow_hyphen_values = true)]
    pub exit_y: Option<f32>,

    /// Fog tween length in seconds.
    #[arg(long)]
    pub fog_duration: Option<f32>,

    /// Volume crossfade length in seconds.
    #[arg(long)]
    pub blend_duration: Option<f32>,

    /// Enable or disable depth auto-triggering.
    #[arg(long)]
    pub auto_trigger: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Simulated seconds to run the demo for.
    #[arg(long, default_value_t = 12.0)]
    pub seconds: f32,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        let underwater = &mut self.underwater;
        if let Some(y) = args.enter_y {
            underwater.enter_y = y;
        }
        if let Some(y) = args.exit_y {
            underwater.exit_y = y;
        }
        if let Some(d) = args.fog_duration {
            underwater.fog.duration = d;
        }
        if let Some(d) = args.blend_duration {
            underwater.volumes.duration = d;
        }
        if let Some(auto) = args.auto_trigger {
            underwater.auto_trigger = auto;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
