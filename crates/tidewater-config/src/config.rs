//! Settings tree with scene defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tidewater_math::EasingCurve;

use crate::error::ConfigError;

/// File name used inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

const APP_DIR_NAME: &str = "tidewater";

/// Resolve the default config directory (`<os config dir>/tidewater`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(APP_DIR_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Top-level settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Depth-triggered fog and volume crossfade.
    pub underwater: UnderwaterConfig,
    /// Mouse-drag rotation of the showcased object.
    pub drag: DragConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Underwater transition settings.
///
/// The camera goes under when its height drops below `enter_y` and comes back
/// up once it rises above `exit_y`. Keeping `exit_y` above `enter_y` gives the
/// band of hysteresis that stops the state flapping at the waterline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UnderwaterConfig {
    /// Evaluate camera height every tick. Manual triggers work either way.
    pub auto_trigger: bool,
    /// World height below which the camera counts as submerged.
    pub enter_y: f32,
    /// World height above which a submerged camera surfaces.
    pub exit_y: f32,
    /// Fog parameters and their tween.
    pub fog: FogConfig,
    /// Surface/underwater post-processing volume crossfade.
    pub volumes: VolumeBlendConfig,
}

/// Distance fog parameters for one environment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FogPreset {
    /// Distance at which linear fog begins.
    pub start: f32,
    /// Distance at which linear fog is fully opaque.
    pub end: f32,
    /// Exponential fog density.
    pub density: f32,
}

/// Fog crossfade settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FogConfig {
    /// Interpolate fog over `duration`; when false, fog snaps to the preset.
    pub tween: bool,
    /// Tween length in seconds.
    pub duration: f32,
    /// Easing applied to tween progress.
    pub curve: EasingCurve,
    /// Fog above water.
    pub surface: FogPreset,
    /// Fog below water.
    pub underwater: FogPreset,
}

/// Volume weight crossfade settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VolumeBlendConfig {
    /// Crossfade length in seconds.
    pub duration: f32,
    /// Easing applied to crossfade progress.
    pub curve: EasingCurve,
}

/// Drag-to-rotate settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DragConfig {
    /// Rotation in degrees per pixel of cursor travel.
    pub degrees_per_pixel: f32,
    /// Invert the vertical drag direction.
    pub invert_y: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log filter (e.g., "debug", "info,tidewater_underwater=trace").
    pub log_level: String,
    /// Log a line with fog and weights every N demo ticks (0 = never).
    pub trace_every_ticks: u32,
}

// --- Default implementations ---

impl Default for UnderwaterConfig {
    fn default() -> Self {
        Self {
            auto_trigger: true,
            enter_y: 0.0,
            exit_y: 0.25,
            fog: FogConfig::default(),
            volumes: VolumeBlendConfig::default(),
        }
    }
}

impl FogPreset {
    /// Clear air above the waterline.
    pub const SURFACE: Self = Self {
        start: 500.0,
        end: 1000.0,
        density: 0.005,
    };

    /// Murky water below it.
    pub const UNDERWATER: Self = Self {
        start: 200.0,
        end: 800.0,
        density: 0.02,
    };
}

impl Default for FogPreset {
    fn default() -> Self {
        Self::SURFACE
    }
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            tween: true,
            duration: 2.0,
            curve: EasingCurve::Linear,
            surface: FogPreset::SURFACE,
            underwater: FogPreset::UNDERWATER,
        }
    }
}

impl Default for VolumeBlendConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            curve: EasingCurve::Linear,
        }
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            degrees_per_pixel: 0.25,
            invert_y: false,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            trace_every_ticks: 30,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load `config.ron` from `config_dir`, writing a default one if absent.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save as pretty-printed RON to `config_dir/config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })
    }

    /// Re-read the file. Returns `Some(new_config)` only if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidewater_math::Keyframe;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(4))
                .unwrap();
        assert!(ron_str.contains("auto_trigger: true"));
        assert!(ron_str.contains("tween: true"));
        assert!(ron_str.contains("curve: Linear"));
    }

    #[test]
    fn test_default_thresholds_have_hysteresis() {
        let config = UnderwaterConfig::default();
        assert!(
            config.exit_y > config.enter_y,
            "default exit_y {} must sit above enter_y {}",
            config.exit_y,
            config.enter_y
        );
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.underwater.volumes.curve =
            EasingCurve::Keyframes(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)]);
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let ron_str = "(underwater: (enter_y: -2.0))";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.underwater.enter_y, -2.0);
        assert_eq!(config.underwater.exit_y, 0.25);
        assert_eq!(config.underwater.fog, FogConfig::default());
        assert_eq!(config.drag, DragConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(caustics: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.underwater.exit_y = 1.5;
        config.underwater.fog.tween = false;
        config.underwater.fog.underwater.density = 0.05;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.underwater.fog.duration = 4.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.map(|c| c.underwater.fog.duration), Some(4.0));
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_reload_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::default().reload(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }), "got {err:?}");
    }

    #[test]
    fn test_invalid_ron_produces_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)), "got {err:?}");
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// scene settings\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
