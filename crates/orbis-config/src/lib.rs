//! Configuration system for Orbis.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and deserialize forward/backward compatibly.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, CullingConfig, DebugConfig, MotionConfig, RenderConfig, WindowConfig,
};
pub use error::ConfigError;
