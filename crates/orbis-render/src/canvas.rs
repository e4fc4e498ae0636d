//! The drawing surface abstraction.
//!
//! Coordinates passed to a [`Canvas`] are logical (CSS-pixel equivalent);
//! implementations map them onto their backing resolution.

use glam::DVec2;

use crate::color::Rgba;

/// Line style for stroked paths.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    /// Line width in logical pixels.
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }
}

/// A 2-D surface that only knows flat-color rectangles and lines.
pub trait Canvas {
    /// Fill the whole surface with `color`, discarding previous content.
    fn clear(&mut self, color: Rgba);

    /// Fill an axis-aligned rectangle with its top-left corner at `(x, y)`.
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba);

    /// Stroke an open polyline through `points` as a single path.
    fn stroke_polyline(&mut self, points: &[DVec2], stroke: Stroke);

    /// Stroke one straight segment.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, stroke: Stroke) {
        self.stroke_polyline(&[from, to], stroke);
    }
}
