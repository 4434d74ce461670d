//! Errors raised while locating, reading, or writing `config.ron`.

use std::path::PathBuf;

/// Failure modes of the configuration layer.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The OS exposes no configuration directory and none was given.
    #[error("no configuration directory available; pass --config <dir>")]
    NoConfigDir,

    /// Reading `config.ron` failed.
    #[error("failed to read {path}: {source}")]
    ReadError {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Creating the directory or writing `config.ron` failed.
    #[error("failed to write {path}: {source}")]
    WriteError {
        /// File or directory that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("failed to parse config: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// Serializing the settings to RON failed.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
