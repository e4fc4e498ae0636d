//! Platform concerns: where configuration and logs live, and whether the
//! user asked for reduced motion.

use std::path::{Path, PathBuf};

/// Environment variable carrying the reduced-motion preference.
pub const REDUCED_MOTION_ENV: &str = "ORBIS_REDUCED_MOTION";

const APP_NAME: &str = "orbis";

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    #[error("could not determine OS configuration directory")]
    NoConfigDir,
    /// Directory creation failed.
    #[error("platform I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// OS-specific directories (XDG on Linux, Known Folders on Windows,
/// Library on macOS).
#[derive(Debug, Clone)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl PlatformDirs {
    /// Resolve directories without creating them.
    pub fn resolve() -> Result<Self, PlatformError> {
        let base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        Ok(Self::resolve_with_root(&base))
    }

    /// Resolve directories under a custom base path.
    pub fn resolve_with_root(root: &Path) -> Self {
        let app_dir = root.join(APP_NAME);
        Self {
            config_dir: app_dir.clone(),
            log_dir: app_dir.join("logs"),
        }
    }

    /// Create all directories on disk.
    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

/// Whether the environment asks for reduced motion. Sampled once at startup.
pub fn prefers_reduced_motion() -> bool {
    parse_reduced_motion(std::env::var(REDUCED_MOTION_ENV).ok().as_deref())
}

/// Interpret a reduced-motion setting: `1`, `true`, `yes`, `on` and
/// `reduce` (any case) enable it.
pub fn parse_reduced_motion(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "reduce"
        )
    })
}
