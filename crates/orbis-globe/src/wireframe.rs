//! Latitude/longitude wireframe drawn over the surface raster.
//!
//! The lattice has one vertex per grid *edge* (13 × 19), unlike the surface
//! sampler which works on cell centres. Parallels are emitted first, then
//! meridians, each as a separate one-segment stroke.

use std::f64::consts::{PI, TAU};

use orbis_render::{Canvas, Rgba, Stroke};

use crate::projection::{ProjectedPoint, SurfaceMetrics};
use crate::rotation::{RotationState, spherical};
use crate::{LATITUDE_SEGMENTS, LONGITUDE_SEGMENTS};

pub const EQUATOR_COLOR: Rgba = Rgba::with_alpha(150, 200, 255, 0.6);
pub const FRONT_COLOR: Rgba = Rgba::with_alpha(59, 130, 246, 0.85);
pub const BACK_COLOR: Rgba = Rgba::with_alpha(59, 130, 246, 0.5);

const EQUATOR_WIDTH: f64 = 1.5;
const LINE_WIDTH: f64 = 1.0;
const EQUATOR_ROW: usize = LATITUDE_SEGMENTS / 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Along a parallel, `(i, j) – (i, j + 1)`.
    Parallel,
    /// Along a meridian, `(i, j) – (i + 1, j)`.
    Meridian,
}

/// One visible lattice edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WireSegment {
    pub direction: Direction,
    /// Latitude index of the first endpoint.
    pub row: usize,
    pub column: usize,
    pub from: ProjectedPoint,
    pub to: ProjectedPoint,
}

impl WireSegment {
    pub fn stroke(&self) -> Stroke {
        match self.direction {
            Direction::Parallel if self.row == EQUATOR_ROW => {
                Stroke::new(EQUATOR_COLOR, EQUATOR_WIDTH)
            }
            Direction::Meridian if self.row == EQUATOR_ROW - 1 || self.row == EQUATOR_ROW => {
                Stroke::new(EQUATOR_COLOR, LINE_WIDTH)
            }
            _ if self.from.z > 0.0 || self.to.z > 0.0 => Stroke::new(FRONT_COLOR, LINE_WIDTH),
            _ => Stroke::new(BACK_COLOR, LINE_WIDTH),
        }
    }
}

/// Projected lattice vertices, row-major with a stride of
/// `LONGITUDE_SEGMENTS + 1`.
pub fn lattice(metrics: &SurfaceMetrics, rotation: &RotationState) -> Vec<ProjectedPoint> {
    let r = metrics.radius;
    let mut points = Vec::with_capacity((LATITUDE_SEGMENTS + 1) * (LONGITUDE_SEGMENTS + 1));
    for i in 0..=LATITUDE_SEGMENTS {
        let theta = PI * i as f64 / LATITUDE_SEGMENTS as f64;
        for j in 0..=LONGITUDE_SEGMENTS {
            let phi = TAU * j as f64 / LONGITUDE_SEGMENTS as f64 + rotation.yaw();
            points.push(metrics.project(rotation.tilt(spherical(r, theta, phi))));
        }
    }
    points
}

/// Visible segments in draw order. A segment is kept when either endpoint
/// lies in front of `-radius * near_side`.
pub fn segments(
    metrics: &SurfaceMetrics,
    rotation: &RotationState,
    near_side: f64,
) -> Vec<WireSegment> {
    let points = lattice(metrics, rotation);
    let stride = LONGITUDE_SEGMENTS + 1;
    let cutoff = -metrics.radius * near_side;
    let visible = |a: &ProjectedPoint, b: &ProjectedPoint| a.z > cutoff || b.z > cutoff;
    let mut out = Vec::new();

    for i in 0..=LATITUDE_SEGMENTS {
        for j in 0..LONGITUDE_SEGMENTS {
            let (from, to) = (points[i * stride + j], points[i * stride + j + 1]);
            if visible(&from, &to) {
                out.push(WireSegment {
                    direction: Direction::Parallel,
                    row: i,
                    column: j,
                    from,
                    to,
                });
            }
        }
    }
    for j in 0..=LONGITUDE_SEGMENTS {
        for i in 0..LATITUDE_SEGMENTS {
            let (from, to) = (points[i * stride + j], points[(i + 1) * stride + j]);
            if visible(&from, &to) {
                out.push(WireSegment {
                    direction: Direction::Meridian,
                    row: i,
                    column: j,
                    from,
                    to,
                });
            }
        }
    }
    out
}

pub fn draw(
    canvas: &mut impl Canvas,
    metrics: &SurfaceMetrics,
    rotation: &RotationState,
    near_side: f64,
) {
    for segment in segments(metrics, rotation, near_side) {
        canvas.stroke_line(segment.from.screen(), segment.to.screen(), segment.stroke());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbis_render::DrawRecorder;

    fn metrics() -> SurfaceMetrics {
        SurfaceMetrics::new(400.0, 300.0, 1.0)
    }

    #[test]
    fn test_lattice_size() {
        let points = lattice(&metrics(), &RotationState::default());
        assert_eq!(points.len(), 13 * 19);
    }

    #[test]
    fn test_equator_parallel_style() {
        let segs = segments(&metrics(), &RotationState::default(), 0.3);
        let equator: Vec<_> = segs
            .iter()
            .filter(|s| s.direction == Direction::Parallel && s.row == 6)
            .collect();
        assert!(!equator.is_empty());
        for seg in equator {
            assert_eq!(seg.stroke(), Stroke::new(EQUATOR_COLOR, 1.5));
        }
    }

    #[test]
    fn test_meridians_near_equator_use_equator_color() {
        let segs = segments(&metrics(), &RotationState::default(), 0.3);
        for seg in segs.iter().filter(|s| s.direction == Direction::Meridian) {
            let stroke = seg.stroke();
            if seg.row == 5 || seg.row == 6 {
                assert_eq!(stroke, Stroke::new(EQUATOR_COLOR, 1.0));
            } else {
                assert_ne!(stroke.color, EQUATOR_COLOR);
                assert_eq!(stroke.width, 1.0);
            }
        }
    }

    #[test]
    fn test_front_and_back_tiers() {
        let segs = segments(&metrics(), &RotationState::default(), 0.3);
        let mut saw_front = false;
        let mut saw_back = false;
        for seg in segs
            .iter()
            .filter(|s| s.direction == Direction::Parallel && s.row != 6)
        {
            let front = seg.from.z > 0.0 || seg.to.z > 0.0;
            let expected = if front { FRONT_COLOR } else { BACK_COLOR };
            assert_eq!(seg.stroke().color, expected);
            saw_front |= front;
            saw_back |= !front;
        }
        assert!(saw_front && saw_back);
    }

    #[test]
    fn test_hidden_segments_are_skipped() {
        let m = metrics();
        let segs = segments(&m, &RotationState::default(), 0.3);
        let total = 13 * 18 + 19 * 12;
        assert!(segs.len() < total);
        for seg in &segs {
            assert!(seg.from.z > -m.radius * 0.3 || seg.to.z > -m.radius * 0.3);
        }
    }

    #[test]
    fn test_parallels_drawn_before_meridians() {
        let segs = segments(&metrics(), &RotationState::default(), 0.3);
        let first_meridian = segs
            .iter()
            .position(|s| s.direction == Direction::Meridian)
            .unwrap();
        assert!(
            segs[first_meridian..]
                .iter()
                .all(|s| s.direction == Direction::Meridian)
        );
    }

    #[test]
    fn test_draw_strokes_each_segment_once() {
        let m = metrics();
        let rotation = RotationState::default();
        let mut rec = DrawRecorder::new();
        draw(&mut rec, &m, &rotation, 0.3);
        assert_eq!(rec.commands().len(), segments(&m, &rotation, 0.3).len());
        assert!(rec.strokes_with_color(EQUATOR_COLOR).any(|(_, s)| s.width == 1.5));
    }
}
