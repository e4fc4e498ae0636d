//! The binary entry point for Orbis.

use clap::Parser;
use orbis_app::platform::{self, PlatformDirs};
use orbis_app::{snapshot, window};
use orbis_config::{CliArgs, Config};

fn main() {
    let args = CliArgs::parse();

    let dirs = match &args.config {
        Some(dir) => PlatformDirs {
            config_dir: dir.clone(),
            log_dir: dir.join("logs"),
        },
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Failed to resolve platform directories: {e}");
                std::process::exit(1);
            }
        },
    };
    if let Err(e) = dirs.create_dirs() {
        eprintln!("Failed to create platform directories: {e}");
        std::process::exit(1);
    }

    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        Config::default()
    });
    config.apply_cli_overrides(&args);
    if platform::prefers_reduced_motion() {
        config.motion.reduced_motion = true;
    }

    orbis_log::init_logging(
        Some(&dirs.log_dir),
        cfg!(debug_assertions),
        Some(&config),
    );
    tracing::info!(
        config = %dirs.config_dir.display(),
        reduced_motion = config.motion.reduced_motion,
        "Orbis starting"
    );

    if let Some(path) = &args.snapshot {
        let frame = snapshot::render_snapshot(&config);
        if let Err(e) = snapshot::write_png(path, &frame) {
            tracing::error!("Snapshot failed: {e}");
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = window::run(config) {
        tracing::error!("Event loop failed: {e}");
        std::process::exit(1);
    }
}
