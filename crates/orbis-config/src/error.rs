//! Configuration error types.

use std::path::PathBuf;

/// Errors from reading or writing `config.ron`. File errors carry the path
/// they happened on.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read settings from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write settings to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not valid RON for [`crate::Config`].
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },

    #[error("cannot encode settings: {0}")]
    Serialize(#[from] ron::Error),
}
