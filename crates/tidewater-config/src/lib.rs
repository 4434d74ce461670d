//! Configuration system for Tidewater.
//!
//! Settings persist to disk as RON, tolerate missing and unknown fields, and
//! can be overridden from the command line via clap.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, DragConfig, FogConfig, FogPreset, UnderwaterConfig,
    VolumeBlendConfig, default_config_dir,
};
pub use error::ConfigError;
