//! Globe orientation: yaw about the vertical axis, pitch toward the viewer.

use glam::{DVec2, DVec3};

pub const INITIAL_PITCH: f64 = 0.2;

/// Pitch is confined to `[-PITCH_LIMIT, PITCH_LIMIT]` radians.
pub const PITCH_LIMIT: f64 = 0.5;

/// Radians of yaw per logical pixel of horizontal drag.
pub const DRAG_YAW_PER_PIXEL: f64 = 0.01;

/// Radians of pitch per logical pixel of vertical drag.
pub const DRAG_PITCH_PER_PIXEL: f64 = 0.005;

/// Current orientation of the globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationState {
    yaw: f64,
    pitch: f64,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: INITIAL_PITCH,
        }
    }
}

impl RotationState {
    pub fn new(yaw: f64, pitch: f64) -> Self {
        let mut state = Self { yaw, pitch: 0.0 };
        state.set_pitch(pitch);
        state
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Set the pitch, clamped to the allowed range. NaN is ignored.
    pub fn set_pitch(&mut self, pitch: f64) {
        if !pitch.is_nan() {
            self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    /// Automatic spin for one frame.
    pub fn advance(&mut self, yaw_step: f64) {
        self.yaw += yaw_step;
    }

    /// Apply a drag displacement in logical pixels.
    pub fn apply_drag(&mut self, delta: DVec2) {
        self.yaw += delta.x * DRAG_YAW_PER_PIXEL;
        self.set_pitch(self.pitch + delta.y * DRAG_PITCH_PER_PIXEL);
    }

    /// Rotate a globe-space point by the pitch (about the screen x axis).
    pub fn tilt(&self, p: DVec3) -> DVec3 {
        let (sin, cos) = self.pitch.sin_cos();
        DVec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos)
    }
}

/// Point on a sphere of radius `r` at polar angle `theta` (0 at the north
/// pole) and longitude `phi`.
pub fn spherical(r: f64, theta: f64, phi: f64) -> DVec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    let (sin_p, cos_p) = phi.sin_cos();
    DVec3::new(r * sin_t * cos_p, r * cos_t, r * sin_t * sin_p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_orientation() {
        let r = RotationState::default();
        assert_eq!(r.yaw(), 0.0);
        assert_eq!(r.pitch(), 0.2);
    }

    #[test]
    fn test_pitch_is_clamped_for_any_drag() {
        let mut r = RotationState::default();
        for dy in [1.0e6, -1.0e6, 300.0, -45.0, f64::INFINITY, f64::NEG_INFINITY] {
            r.apply_drag(DVec2::new(0.0, dy));
            assert!(r.pitch().abs() <= PITCH_LIMIT, "dy {dy}");
        }
        r.apply_drag(DVec2::new(0.0, f64::NAN));
        assert!(r.pitch().abs() <= PITCH_LIMIT);
    }

    #[test]
    fn test_drag_is_proportional() {
        let mut r = RotationState::default();
        r.apply_drag(DVec2::new(10.0, 15.0));
        assert!((r.yaw() - 0.10).abs() < 1e-12);
        assert!((r.pitch() - 0.275).abs() < 1e-12);
    }

    #[test]
    fn test_advance_adds_yaw_only() {
        let mut r = RotationState::default();
        r.advance(0.004);
        assert!((r.yaw() - 0.004).abs() < 1e-15);
        assert_eq!(r.pitch(), 0.2);
    }

    #[test]
    fn test_zero_pitch_tilt_is_identity() {
        let r = RotationState::new(0.0, 0.0);
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(r.tilt(p), p);
    }

    #[test]
    fn test_tilt_preserves_length() {
        let r = RotationState::new(0.0, 0.4);
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert!((r.tilt(p).length() - p.length()).abs() < 1e-12);
    }

    #[test]
    fn test_spherical_poles_and_equator() {
        let north = spherical(2.0, 0.0, 1.0);
        assert!((north - DVec3::new(0.0, 2.0, 0.0)).length() < 1e-12);
        let east = spherical(2.0, std::f64::consts::FRAC_PI_2, 0.0);
        assert!((east - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-12);
    }
}
