//! Deterministic background stars, laid out from the surface size alone.

use orbis_render::{Canvas, Rgba};

use crate::projection::SurfaceMetrics;

pub const STAR_COLOR: Rgba = Rgba::with_alpha(255, 255, 255, 0.4);
pub const ACCENT_COLOR: Rgba = Rgba::with_alpha(59, 130, 246, 0.5);

pub const STAR_COUNT: usize = 60;
pub const ACCENT_COUNT: usize = 8;

/// A square dot at a floored logical position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgba,
}

/// All stars for a surface: the white field followed by the blue accents.
pub fn stars(metrics: &SurfaceMetrics) -> Vec<Star> {
    let (w, h) = (metrics.width, metrics.height);
    let field = (0..STAR_COUNT).map(|i| {
        let k = i as f64;
        Star {
            x: ((k * 1.3).sin() * 0.45 + 0.5) * w,
            y: ((k * 0.7).cos() * 0.45 + 0.5) * h,
            size: if i % 3 == 0 { 1.5 } else { 1.0 },
            color: STAR_COLOR,
        }
    });
    let accents = (0..ACCENT_COUNT).map(|i| {
        let k = i as f64;
        Star {
            x: ((k * 2.1 + 1.0).sin() * 0.4 + 0.5) * w,
            y: ((k * 1.7 + 2.0).cos() * 0.4 + 0.5) * h,
            size: 2.0,
            color: ACCENT_COLOR,
        }
    });

    field
        .chain(accents)
        .map(|star| Star {
            x: star.x.floor(),
            y: star.y.floor(),
            ..star
        })
        .collect()
}

pub fn draw(canvas: &mut impl Canvas, metrics: &SurfaceMetrics) {
    for star in stars(metrics) {
        canvas.fill_rect(star.x, star.y, star.size, star.size, star.color);
    }
}
