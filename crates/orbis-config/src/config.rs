//! Configuration structs with sensible defaults and RON persistence.

use std::fs;
use std::path::Path;

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window settings.
    pub window: WindowConfig,
    /// Animation settings.
    pub motion: MotionConfig,
    /// Depth thresholds used to cull far-side geometry.
    pub culling: CullingConfig,
    /// Rendering settings.
    pub render: RenderConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
    /// Enable vsync (PresentMode::Fifo).
    pub vsync: bool,
    /// Window title.
    pub title: String,
    /// Device pixel ratio override. `None` uses the window's scale factor.
    pub pixel_ratio: Option<f64>,
}

/// Animation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// Render a single static frame and never schedule another one.
    pub reduced_motion: bool,
    /// Yaw added per frame while the globe spins on its own (radians).
    pub auto_yaw_speed: f64,
}

/// Culling thresholds, expressed as fractions of the globe radius.
///
/// Geometry whose camera-space depth lies below `-radius * threshold` is
/// considered to be on the far side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CullingConfig {
    /// Land/water cells behind this depth are skipped.
    pub surface_back_face: f64,
    /// Wireframe segments with both endpoints behind this depth are skipped.
    pub wireframe_near_side: f64,
    /// Orbiters behind this depth are not drawn.
    pub orbiter_far_side: f64,
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// RGBA8 color the surface is cleared to before each frame.
    pub background: [u8; 4],
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960,
            height: 720,
            vsync: true,
            title: "Orbis".to_string(),
            pixel_ratio: None,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            auto_yaw_speed: 0.004,
        }
    }
}

impl Default for CullingConfig {
    fn default() -> Self {
        Self {
            surface_back_face: 0.2,
            wireframe_near_side: 0.3,
            orbiter_far_side: 0.5,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: [8, 10, 24, 255],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Persistence ---

/// Settings file name inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

impl Config {
    /// Read settings from `config_dir`, writing the defaults there first if
    /// no settings file exists yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        if !path.exists() {
            let config = Self::default();
            config.save(config_dir)?;
            log::info!("No settings found, wrote defaults to {}", path.display());
            return Ok(config);
        }

        let config = Self::load(&path)?;
        log::info!("Settings loaded from {}", path.display());
        Ok(config)
    }

    /// Parse a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write these settings to `config_dir/config.ron`, creating the
    /// directory if needed.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let path = config_dir.join(CONFIG_FILE);
        let text = ron::ser::to_string_pretty(self, PrettyConfig::new().depth_limit(3))?;

        fs::create_dir_all(config_dir)
            .and_then(|()| fs::write(&path, text))
            .map_err(|source| ConfigError::Write { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 960"));
        assert!(ron_str.contains("auto_yaw_speed: 0.004"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.window.pixel_ratio = Some(2.0);
        config.motion.reduced_motion = true;
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(window: (width: 400), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.window.width, 400);
        assert_eq!(config.window.height, 720);
        assert_eq!(config.culling, CullingConfig::default());
        assert_eq!(config.motion, MotionConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_default_culling_thresholds() {
        let culling = CullingConfig::default();
        assert_eq!(culling.surface_back_face, 0.2);
        assert_eq!(culling.wireframe_near_side, 0.3);
        assert_eq!(culling.orbiter_far_side, 0.5);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.window.width = 400;
        config.window.height = 300;
        config.render.background = [0, 0, 0, 0];

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_invalid_ron_reports_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CONFIG_FILE);
        std::fs::write(&file, "{{not valid}}").unwrap();

        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(&err, ConfigError::Parse { path, .. } if *path == file));
        assert!(err.to_string().contains("config.ron"));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "{{not valid}}");
    }

    #[test]
    fn test_unreadable_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(dir.path()).unwrap_err();
        assert!(matches!(&err, ConfigError::Read { path, .. } if path.as_path() == dir.path()));
    }

    #[test]
    fn test_save_into_file_reports_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let err = Config::default().save(&blocker).unwrap_err();
        assert!(
            matches!(&err, ConfigError::Write { path, .. } if *path == blocker.join(CONFIG_FILE))
        );
    }
}
