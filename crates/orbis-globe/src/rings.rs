//! Two tilted orbital rings around the globe.

use std::f64::consts::{PI, TAU};

use glam::{DVec2, DVec3};
use orbis_render::{Canvas, Rgba, Stroke};

use crate::projection::SurfaceMetrics;
use crate::rotation::RotationState;

pub const RING_COLOR: Rgba = Rgba::with_alpha(59, 130, 246, 0.35);
pub const RING_WIDTH: f64 = 1.2;

pub const RING_SEGMENTS: usize = 32;
const RING_RADIUS_FACTOR: f64 = 1.35;
const RING_TILTS: [f64; 2] = [0.4, 0.9];
const PHASE_SPEED: f64 = 0.02;

/// Phase offset of `ring` at frame `time`, in `[0, 2π)`.
pub fn phase(ring: usize, time: u64) -> f64 {
    (time as f64 * PHASE_SPEED + ring as f64 * PI).rem_euclid(TAU)
}

/// Screen-space polyline for one ring, closed (first and last point
/// coincide). Rings are never culled and ignore yaw.
pub fn ring_points(
    metrics: &SurfaceMetrics,
    rotation: &RotationState,
    ring: usize,
    time: u64,
) -> Vec<DVec2> {
    let radius = metrics.radius * RING_RADIUS_FACTOR;
    let (sin_tilt, cos_tilt) = RING_TILTS[ring % RING_TILTS.len()].sin_cos();
    let offset = phase(ring, time);

    (0..=RING_SEGMENTS)
        .map(|i| {
            let t = TAU * i as f64 / RING_SEGMENTS as f64 + offset;
            let (sin_t, cos_t) = t.sin_cos();
            let p = DVec3::new(
                radius * cos_t,
                radius * sin_t * cos_tilt,
                radius * sin_t * sin_tilt,
            );
            metrics.project(rotation.tilt(p)).screen()
        })
        .collect()
}

pub fn draw(canvas: &mut impl Canvas, metrics: &SurfaceMetrics, rotation: &RotationState, time: u64) {
    let stroke = Stroke::new(RING_COLOR, RING_WIDTH);
    for ring in 0..RING_TILTS.len() {
        canvas.stroke_polyline(&ring_points(metrics, rotation, ring, time), stroke);
    }
}
