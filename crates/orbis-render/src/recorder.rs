//! A [`Canvas`] that records draw calls instead of rasterizing them.
//!
//! Used to inspect exactly what a frame asked for (colors, weights, counts)
//! without depending on pixel output.

use glam::DVec2;

use crate::canvas::{Canvas, Stroke};
use crate::color::Rgba;

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgba),
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Rgba,
    },
    Polyline {
        points: Vec<DVec2>,
        stroke: Stroke,
    },
}

/// Records every draw call in order.
#[derive(Clone, Debug, Default)]
pub struct DrawRecorder {
    commands: Vec<DrawCommand>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Number of `clear` calls, i.e. the number of frames started.
    pub fn clear_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear(_)))
            .count()
    }

    /// All recorded rectangle fills with the given color.
    pub fn rects_with_color(&self, color: Rgba) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |c| matches!(c, DrawCommand::FillRect { color: fill, .. } if *fill == color))
    }

    /// All recorded polylines stroked with the given color.
    pub fn strokes_with_color(&self, color: Rgba) -> impl Iterator<Item = (&[DVec2], Stroke)> {
        self.commands.iter().filter_map(move |c| match c {
            DrawCommand::Polyline { points, stroke } if stroke.color == color => {
                Some((points.as_slice(), *stroke))
            }
            _ => None,
        })
    }
}

impl Canvas for DrawRecorder {
    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    fn stroke_polyline(&mut self, points: &[DVec2], stroke: Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut rec = DrawRecorder::new();
        rec.clear(Rgba::BLACK);
        rec.fill_rect(1.0, 2.0, 3.0, 4.0, Rgba::WHITE);
        rec.stroke_line(DVec2::ZERO, DVec2::ONE, Stroke::new(Rgba::WHITE, 1.5));

        assert_eq!(rec.commands().len(), 3);
        assert_eq!(rec.commands()[0], DrawCommand::Clear(Rgba::BLACK));
        assert_eq!(rec.clear_count(), 1);
        assert_eq!(rec.rects_with_color(Rgba::WHITE).count(), 1);

        let (points, stroke) = rec.strokes_with_color(Rgba::WHITE).next().unwrap();
        assert_eq!(points, &[DVec2::ZERO, DVec2::ONE]);
        assert_eq!(stroke.width, 1.5);
    }

    #[test]
    fn test_reset_empties_recorder() {
        let mut rec = DrawRecorder::new();
        rec.clear(Rgba::BLACK);
        rec.reset();
        assert!(rec.is_empty());
    }
}
