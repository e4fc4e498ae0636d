//! Command-line argument parsing for Orbis.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orbis command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orbis", about = "Pixel-style rotating globe")]
pub struct CliArgs {
    /// Window width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Render one static frame instead of animating.
    #[arg(long)]
    pub reduced_motion: bool,

    /// Device pixel ratio override.
    #[arg(long)]
    pub pixel_ratio: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Render a single frame to this PNG file and exit without opening a window.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.window.width = w;
        }
        if let Some(h) = args.height {
            self.window.height = h;
        }
        if args.reduced_motion {
            self.motion.reduced_motion = true;
        }
        if let Some(ratio) = args.pixel_ratio {
            self.window.pixel_ratio = Some(ratio);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(400),
            reduced_motion: true,
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.window.width, 400);
        assert!(config.motion.reduced_motion);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.window.height, 720);
        assert_eq!(config.window.pixel_ratio, None);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_reduced_motion_flag_does_not_clear_config() {
        let mut config = Config::default();
        config.motion.reduced_motion = true;
        config.apply_cli_overrides(&CliArgs::default());
        assert!(config.motion.reduced_motion);
    }

    #[test]
    fn test_parse_from_args() {
        let args = CliArgs::parse_from([
            "orbis",
            "--width",
            "400",
            "--height",
            "300",
            "--reduced-motion",
            "--snapshot",
            "globe.png",
        ]);
        assert_eq!(args.width, Some(400));
        assert_eq!(args.height, Some(300));
        assert!(args.reduced_motion);
        assert_eq!(args.snapshot, Some(PathBuf::from("globe.png")));
    }
}
