//! Surface metrics and the fixed perspective projection.

use glam::{DVec2, DVec3};

/// Globe radius as a fraction of the smaller surface dimension.
pub const RADIUS_FRACTION: f64 = 0.35;

/// Strength of the depth term in the perspective divide.
pub const PERSPECTIVE_STRENGTH: f64 = 0.4;

/// A point after projection: screen position plus the camera-space depth it
/// came from. Positive depth faces the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ProjectedPoint {
    pub fn screen(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// Layout of the drawing surface in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub pixel_ratio: f64,
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

impl SurfaceMetrics {
    /// Derive metrics from a logical size and device pixel ratio. Negative or
    /// non-finite sizes collapse to zero; an invalid ratio becomes 1.
    pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let width = non_negative(width);
        let height = non_negative(height);
        let pixel_ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        Self {
            width,
            height,
            center_x: width / 2.0,
            center_y: height / 2.0,
            radius: width.min(height) * RADIUS_FRACTION,
            pixel_ratio,
        }
    }

    /// True when there is nothing to draw on.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Backing store resolution in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }

    /// Perspective-project a camera-space point. Depth is carried through.
    pub fn project(&self, p: DVec3) -> ProjectedPoint {
        let denom = self.radius + p.z * PERSPECTIVE_STRENGTH;
        let scale = if denom == 0.0 { 1.0 } else { self.radius / denom };
        ProjectedPoint {
            x: self.center_x + p.x * scale,
            y: self.center_y - p.y * scale,
            z: p.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_projects_to_center() {
        let m = SurfaceMetrics::new(400.0, 300.0, 1.0);
        assert_eq!(
            m.project(DVec3::ZERO),
            ProjectedPoint {
                x: 200.0,
                y: 150.0,
                z: 0.0
            }
        );
    }

    #[test]
    fn test_origin_projects_to_center_on_empty_surface() {
        let m = SurfaceMetrics::new(0.0, 0.0, 1.0);
        let p = m.project(DVec3::ZERO);
        assert_eq!((p.x, p.y, p.z), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_metrics_from_size() {
        let m = SurfaceMetrics::new(400.0, 300.0, 2.0);
        assert_eq!(m.center_x, 200.0);
        assert_eq!(m.center_y, 150.0);
        assert!((m.radius - 105.0).abs() < 1e-12);
        assert_eq!(m.backing_size(), (800, 600));
    }

    #[test]
    fn test_depth_scales_offset_from_center() {
        let m = SurfaceMetrics::new(400.0, 400.0, 1.0);
        let positive = m.project(DVec3::new(10.0, 0.0, 50.0));
        let negative = m.project(DVec3::new(10.0, 0.0, -50.0));
        assert!(negative.x - 200.0 > 10.0);
        assert!(positive.x - 200.0 < 10.0);
        assert_eq!(positive.z, 50.0);
    }

    #[test]
    fn test_screen_y_points_down() {
        let m = SurfaceMetrics::new(400.0, 400.0, 1.0);
        assert!(m.project(DVec3::new(0.0, 10.0, 0.0)).y < 200.0);
    }

    #[test]
    fn test_invalid_input_is_sanitized() {
        let m = SurfaceMetrics::new(-5.0, f64::NAN, 0.0);
        assert!(m.is_empty());
        assert_eq!(m.pixel_ratio, 1.0);
        assert_eq!(m.backing_size(), (0, 0));
    }
}
