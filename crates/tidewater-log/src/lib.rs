//! Structured logging for Tidewater via the `tracing` ecosystem.
//!
//! Console output carries uptime timestamps and module paths. Debug builds can
//! also write JSON lines to a file for replaying a session's transitions.

use std::path::{Path, PathBuf};

use tidewater_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_FILTER: &str = "info";

/// File name of the JSON log inside the log directory.
pub const LOG_FILE_NAME: &str = "tidewater.log";

/// Install the global tracing subscriber.
///
/// Filter precedence: `RUST_LOG`, then `config.debug.log_level`, then
/// [`DEFAULT_FILTER`]. When `debug_build` is set and `log_dir` is writable a
/// JSON file layer is added; failures to create it fall back to console only.
///
/// Calling this twice panics inside `tracing-subscriber`; binaries call it once
/// at startup.
///
/// ```no_run
/// use tidewater_config::Config;
/// use tidewater_log::init_logging;
///
/// let config = Config::default();
/// init_logging(Some(std::path::Path::new("./logs")), true, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_from_config(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| build_env_filter(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_names(false)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_path) = log_dir.and_then(prepare_log_file)
        && let Ok(log_file) = std::fs::File::create(&log_path)
    {
        let file_layer = fmt::layer()
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        tracing::debug!(path = %log_path.display(), "JSON file logging enabled");
        return;
    }

    subscriber.init();
}

/// Filter string derived from config, falling back to [`DEFAULT_FILTER`].
pub fn filter_from_config(config: Option<&Config>) -> String {
    config
        .map(|c| c.debug.log_level.trim())
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Parse `filter_str`, falling back to [`default_env_filter`] when it has an
/// invalid directive (e.g. a misspelled level in `config.ron`).
pub fn build_env_filter(filter_str: &str) -> EnvFilter {
    EnvFilter::try_new(filter_str).unwrap_or_else(|_| default_env_filter())
}

/// `EnvFilter` built from [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}

/// Create `log_dir` and return the log file path inside it.
fn prepare_log_file(log_dir: &Path) -> Option<PathBuf> {
    std::fs::create_dir_all(log_dir).ok()?;
    Some(log_dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let filter_str = format!("{}", default_env_filter());
        assert!(filter_str.contains("info"));
    }

    #[test]
    fn test_filter_from_config_level() {
        let mut config = Config::default();
        config.debug.log_level = "debug,tidewater_underwater=trace".to_string();
        assert_eq!(
            filter_from_config(Some(&config)),
            "debug,tidewater_underwater=trace"
        );
    }

    #[test]
    fn test_filter_falls_back_when_blank() {
        let mut config = Config::default();
        config.debug.log_level = "   ".to_string();
        assert_eq!(filter_from_config(Some(&config)), DEFAULT_FILTER);
        assert_eq!(filter_from_config(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_invalid_config_filter_falls_back_to_default() {
        let filter = build_env_filter("tidewater_underwater=loud");
        assert_eq!(format!("{filter}"), format!("{}", default_env_filter()));
    }

    #[test]
    fn test_valid_config_filter_is_kept() {
        let filter = build_env_filter("warn,tidewater_demo=debug");
        assert!(format!("{filter}").contains("tidewater_demo=debug"));
    }

    #[test]
    fn test_env_filter_parsing() {
        let valid_filters = [
            "info",
            "debug,tidewater_underwater=trace",
            "warn,tidewater_demo=debug",
            "error",
        ];

        for filter_str in &valid_filters {
            let result = EnvFilter::try_new(filter_str);
            assert!(result.is_ok(), "Failed to parse filter: {filter_str}");
        }
    }

    #[test]
    fn test_prepare_log_file_creates_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("logs").join("session");

        let path = prepare_log_file(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(path.file_name().unwrap(), LOG_FILE_NAME);
    }
}
