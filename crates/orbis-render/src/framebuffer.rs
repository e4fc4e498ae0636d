//! CPU rasterizer for [`Canvas`] primitives.
//!
//! Pixels are stored row-major as straight-alpha RGBA8. Drawing happens in
//! logical coordinates multiplied by a uniform scale (the device pixel
//! ratio), the same way a 2-D canvas context behaves after `scale(dpr, dpr)`.
//! There is no anti-aliasing: a pixel is either covered or not.

use glam::DVec2;

use crate::canvas::{Canvas, Stroke};
use crate::color::Rgba;

/// Upper bound on DDA steps for a single segment. Longer segments are the
/// product of degenerate projections and are dropped.
const MAX_LINE_STEPS: f64 = 65_536.0;

/// A software render target.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    scale: f64,
    pixels: Vec<[u8; 4]>,
    /// Per-pixel id of the last stroke that touched it, so a thick path
    /// blends each pixel once.
    stroke_marks: Vec<u32>,
    stroke_id: u32,
}

impl Framebuffer {
    /// Create a transparent framebuffer with the given backing resolution.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            scale: 1.0,
            pixels: vec![[0; 4]; len],
            stroke_marks: vec![0; len],
            stroke_id: 0,
        }
    }

    /// Change the backing resolution. Content is discarded when the size changes.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        *self = Self {
            scale: self.scale,
            ..Self::new(width, height)
        };
    }

    /// Set the logical-to-physical scale applied to every primitive.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    /// Raw RGBA8 bytes, ready for texture upload or PNG encoding.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// The pixel at physical coordinates, if in range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Blend `color` over the physical-pixel span `[x0, x1) × [y0, y1)`, clipped.
    fn blend_span(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba) {
        let x0 = x0.clamp(0, self.width as i64) as u32;
        let x1 = x1.clamp(0, self.width as i64) as u32;
        let y0 = y0.clamp(0, self.height as i64) as u32;
        let y1 = y1.clamp(0, self.height as i64) as u32;

        for y in y0..y1 {
            let row = self.index(0, y);
            for px in &mut self.pixels[row + x0 as usize..row + x1 as usize] {
                *px = color.over(*px);
            }
        }
    }

    /// Blend a square pen footprint centred at a physical point, skipping
    /// pixels already touched by the current stroke.
    fn stamp(&mut self, center: DVec2, size: i64, color: Rgba) {
        let half = size as f64 / 2.0;
        let x0 = (center.x - half).round() as i64;
        let y0 = (center.y - half).round() as i64;

        for y in y0.max(0)..(y0 + size).min(self.height as i64) {
            for x in x0.max(0)..(x0 + size).min(self.width as i64) {
                let idx = self.index(x as u32, y as u32);
                if self.stroke_marks[idx] != self.stroke_id {
                    self.stroke_marks[idx] = self.stroke_id;
                    self.pixels[idx] = color.over(self.pixels[idx]);
                }
            }
        }
    }

    fn next_stroke_id(&mut self) {
        self.stroke_id = self.stroke_id.wrapping_add(1);
        if self.stroke_id == 0 {
            self.stroke_marks.fill(0);
            self.stroke_id = 1;
        }
    }
}

impl Canvas for Framebuffer {
    fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color.to_array());
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) {
        if !(x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite()) {
            return;
        }
        let s = self.scale;
        let x0 = (x * s).round() as i64;
        let y0 = (y * s).round() as i64;
        let x1 = ((x + width) * s).round() as i64;
        let y1 = ((y + height) * s).round() as i64;
        self.blend_span(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1), color);
    }

    fn stroke_polyline(&mut self, points: &[DVec2], stroke: Stroke) {
        if points.len() < 2 || stroke.color.a == 0 {
            return;
        }
        self.next_stroke_id();

        let s = self.scale;
        let pen = (stroke.width * s).round().max(1.0) as i64;

        for pair in points.windows(2) {
            let a = pair[0] * s;
            let b = pair[1] * s;
            if !(a.is_finite() && b.is_finite()) {
                continue;
            }
            let delta = b - a;
            let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0);
            if steps > MAX_LINE_STEPS {
                log::trace!("Dropping degenerate segment {a:?} -> {b:?}");
                continue;
            }
            let steps = steps as u32;
            for k in 0..=steps {
                let t = k as f64 / steps as f64;
                self.stamp(a + delta * t, pen, stroke.color);
            }
        }
    }
}
