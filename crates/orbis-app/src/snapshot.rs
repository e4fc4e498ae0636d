//! Headless rendering of the initial frame to a PNG file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use orbis_config::Config;
use orbis_globe::{Globe, GlobeOptions};
use orbis_render::Framebuffer;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("nothing to write: frame is {width}x{height}")]
    EmptyFrame { width: u32, height: u32 },
}

/// Paint the globe's initial state at the configured window size, without
/// advancing the animation.
pub fn render_snapshot(config: &Config) -> Framebuffer {
    let mut globe = Globe::new(GlobeOptions::from_config(config));
    globe.resize(
        f64::from(config.window.width),
        f64::from(config.window.height),
        config.window.pixel_ratio.unwrap_or(1.0),
    );

    let metrics = globe.metrics();
    let (width, height) = metrics.backing_size();
    let mut frame = Framebuffer::new(width, height);
    frame.set_scale(metrics.pixel_ratio);
    globe.render(&mut frame);
    frame
}

/// Encode `frame` as an 8-bit RGBA PNG into `out`.
pub fn encode_png(out: impl Write, frame: &Framebuffer) -> Result<(), SnapshotError> {
    let (width, height) = (frame.width(), frame.height());
    if width == 0 || height == 0 {
        return Err(SnapshotError::EmptyFrame { width, height });
    }

    let mut encoder = png::Encoder::new(out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(frame.as_bytes())?;
    writer.finish()?;
    Ok(())
}

/// Write `frame` to `path` as a PNG file.
pub fn write_png(path: &Path, frame: &Framebuffer) -> Result<(), SnapshotError> {
    let file = File::create(path)?;
    encode_png(BufWriter::new(file), frame)?;
    info!(path = %path.display(), width = frame.width(), height = frame.height(), "Snapshot written");
    Ok(())
}
