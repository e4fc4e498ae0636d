//! Pixel-style rotating globe.
//!
//! Everything here is flat-color rectangles and line segments emitted onto a
//! [`orbis_render::Canvas`]. The only 3-D work is spherical sampling, a pitch
//! rotation, a fixed perspective divide and depth culling; layers are painted
//! back to front with no depth buffer.

pub mod globe;
pub mod land_mask;
pub mod orbiters;
pub mod projection;
pub mod rings;
pub mod rotation;
pub mod starfield;
pub mod surface;
pub mod wireframe;

/// Latitude bands from pole to pole.
pub const LATITUDE_SEGMENTS: usize = 12;

/// Longitude sectors around the equator.
pub const LONGITUDE_SEGMENTS: usize = 18;

pub use globe::{CullThresholds, Globe, GlobeOptions};
pub use land_mask::LandMask;
pub use orbiters::{OrbitDescriptor, OrbiterKind};
pub use projection::{ProjectedPoint, SurfaceMetrics};
pub use rotation::RotationState;
