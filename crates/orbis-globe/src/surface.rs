//! Land/water raster: one flat rectangle per visible latitude/longitude cell.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use orbis_render::{Canvas, Rgba};

use crate::land_mask::LandMask;
use crate::projection::{ProjectedPoint, SurfaceMetrics};
use crate::rotation::{RotationState, spherical};
use crate::{LATITUDE_SEGMENTS, LONGITUDE_SEGMENTS};

pub const LAND_COLOR: Rgba = Rgba::with_alpha(120, 180, 120, 0.95);
pub const WATER_COLOR: Rgba = Rgba::with_alpha(100, 160, 220, 0.85);

const MIN_CELL_WIDTH: f64 = 4.0;
const MIN_CELL_HEIGHT: f64 = 3.0;
const CELL_FILL: f64 = 0.9;

/// A visible surface cell, sampled at its centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceCell {
    pub lat: usize,
    pub lon: usize,
    pub center: ProjectedPoint,
    pub land: bool,
}

impl SurfaceCell {
    pub fn color(&self) -> Rgba {
        if self.land { LAND_COLOR } else { WATER_COLOR }
    }
}

/// Rectangle size used for every cell on this surface.
pub fn cell_size(metrics: &SurfaceMetrics) -> DVec2 {
    DVec2::new(
        (metrics.width / LONGITUDE_SEGMENTS as f64 * CELL_FILL).max(MIN_CELL_WIDTH),
        (metrics.height / LATITUDE_SEGMENTS as f64 * CELL_FILL).max(MIN_CELL_HEIGHT),
    )
}

/// Sample every cell centre, dropping cells whose depth is below
/// `-radius * back_face`. Cells come out in latitude-major order.
pub fn sample_cells(
    metrics: &SurfaceMetrics,
    rotation: &RotationState,
    mask: &LandMask,
    back_face: f64,
) -> Vec<SurfaceCell> {
    let r = metrics.radius;
    let cutoff = -r * back_face;
    let mut cells = Vec::with_capacity(LATITUDE_SEGMENTS * LONGITUDE_SEGMENTS);

    for lat in 0..LATITUDE_SEGMENTS {
        let theta = PI * (lat as f64 + 0.5) / LATITUDE_SEGMENTS as f64;
        for lon in 0..LONGITUDE_SEGMENTS {
            let longitude = TAU * (lon as f64 + 0.5) / LONGITUDE_SEGMENTS as f64;
            let p = rotation.tilt(spherical(r, theta, longitude + rotation.yaw()));
            if p.z < cutoff {
                continue;
            }
            cells.push(SurfaceCell {
                lat,
                lon,
                center: metrics.project(p),
                land: mask.sample(theta, longitude),
            });
        }
    }
    cells
}

/// Paint the visible cells.
pub fn draw(
    canvas: &mut impl Canvas,
    metrics: &SurfaceMetrics,
    rotation: &RotationState,
    mask: &LandMask,
    back_face: f64,
) {
    let size = cell_size(metrics);
    for cell in sample_cells(metrics, rotation, mask, back_face) {
        canvas.fill_rect(
            (cell.center.x - size.x / 2.0).floor(),
            (cell.center.y - size.y / 2.0).floor(),
            size.x.ceil(),
            size.y.ceil(),
            cell.color(),
        );
    }
}
