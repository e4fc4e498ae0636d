//! Satellites on fixed elliptical paths around the globe.
//!
//! Positions are a pure function of the frame counter, so dragging (which
//! freezes time) also freezes the orbiters.

use glam::{DVec2, DVec3};
use orbis_render::{Canvas, Rgba};

use crate::projection::{ProjectedPoint, SurfaceMetrics};
use crate::rotation::RotationState;

const ORBIT_RADIUS_FACTOR: f64 = 1.5;
const VERTICAL_SQUASH: f64 = 0.6;
const DEPTH_SQUASH: f64 = 0.5;

/// Sprite shape drawn for an orbiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbiterKind {
    Planet,
    Probe,
    Generic,
}

/// An axis-aligned rectangle relative to the projected centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpritePart {
    pub offset: DVec2,
    pub size: DVec2,
    pub color: Rgba,
}

const fn part(x: f64, y: f64, w: f64, h: f64, color: Rgba) -> SpritePart {
    SpritePart {
        offset: DVec2::new(x, y),
        size: DVec2::new(w, h),
        color,
    }
}

const PLANET_SPRITE: [SpritePart; 2] = [
    part(-6.0, -8.0, 12.0, 16.0, Rgba::opaque(0xe0, 0xe0, 0xe0)),
    part(-4.0, -8.0, 8.0, 4.0, Rgba::with_alpha(80, 140, 80, 0.9)),
];
const PROBE_SPRITE: [SpritePart; 2] = [
    part(-8.0, -4.0, 16.0, 10.0, Rgba::opaque(0x80, 0x80, 0x80)),
    part(-2.0, 2.0, 4.0, 3.0, Rgba::opaque(0xc0, 0x30, 0x30)),
];
const GENERIC_SPRITE: [SpritePart; 1] = [part(-5.0, -6.0, 10.0, 12.0, Rgba::opaque(0x40, 0x40, 0x50))];

impl OrbiterKind {
    /// Rectangles in paint order.
    pub fn sprite(self) -> &'static [SpritePart] {
        match self {
            OrbiterKind::Planet => &PLANET_SPRITE,
            OrbiterKind::Probe => &PROBE_SPRITE,
            OrbiterKind::Generic => &GENERIC_SPRITE,
        }
    }
}

/// Orbit parameters. Offsets are fractions of the globe radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitDescriptor {
    pub base_angle: f64,
    pub angular_speed: f64,
    pub vertical_offset: f64,
    pub depth_offset: f64,
    pub kind: OrbiterKind,
}

impl OrbitDescriptor {
    pub fn angle_at(&self, time: u64) -> f64 {
        self.base_angle + self.angular_speed * time as f64
    }

    /// Globe-space position before pitch is applied.
    pub fn position(&self, radius: f64, time: u64) -> DVec3 {
        let orbit = radius * ORBIT_RADIUS_FACTOR;
        let (sin_a, cos_a) = self.angle_at(time).sin_cos();
        DVec3::new(
            orbit * cos_a,
            orbit * sin_a * VERTICAL_SQUASH + radius * self.vertical_offset,
            orbit * sin_a * DEPTH_SQUASH + radius * self.depth_offset,
        )
    }
}

/// The planet, the probe and the generic satellite.
pub fn default_orbits() -> Vec<OrbitDescriptor> {
    vec![
        OrbitDescriptor {
            base_angle: 0.0,
            angular_speed: 0.015,
            vertical_offset: 0.3,
            depth_offset: 0.2,
            kind: OrbiterKind::Planet,
        },
        OrbitDescriptor {
            base_angle: 2.0,
            angular_speed: 0.012,
            vertical_offset: -0.25,
            depth_offset: 0.15,
            kind: OrbiterKind::Probe,
        },
        OrbitDescriptor {
            base_angle: 4.0,
            angular_speed: 0.018,
            vertical_offset: 0.1,
            depth_offset: -0.3,
            kind: OrbiterKind::Generic,
        },
    ]
}

/// Projected centres of the orbiters in front of `-radius * far_side`,
/// in descriptor order.
pub fn visible(
    orbits: &[OrbitDescriptor],
    metrics: &SurfaceMetrics,
    rotation: &RotationState,
    time: u64,
    far_side: f64,
) -> Vec<(OrbiterKind, ProjectedPoint)> {
    let cutoff = -metrics.radius * far_side;
    orbits
        .iter()
        .filter_map(|orbit| {
            let p = rotation.tilt(orbit.position(metrics.radius, time));
            (p.z >= cutoff).then(|| (orbit.kind, metrics.project(p)))
        })
        .collect()
}

pub fn draw(
    canvas: &mut impl Canvas,
    orbits: &[OrbitDescriptor],
    metrics: &SurfaceMetrics,
    rotation: &RotationState,
    time: u64,
    far_side: f64,
) {
    for (kind, center) in visible(orbits, metrics, rotation, time, far_side) {
        for part in kind.sprite() {
            canvas.fill_rect(
                (center.x + part.offset.x).floor(),
                (center.y + part.offset.y).floor(),
                part.size.x,
                part.size.y,
                part.color,
            );
        }
    }
}
