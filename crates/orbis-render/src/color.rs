//! Straight-alpha RGBA8 colors and source-over blending.

/// An sRGB color with straight (non-premultiplied) 8-bit alpha.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Build a color from a fractional alpha in `[0, 1]`, like CSS `rgba()`.
    pub const fn with_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        let alpha = if alpha < 0.0 {
            0.0
        } else if alpha > 1.0 {
            1.0
        } else {
            alpha
        };
        Self::new(r, g, b, (alpha * 255.0 + 0.5) as u8)
    }

    pub const fn from_array(rgba: [u8; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha(self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Composite `self` over `dst` (Porter-Duff source-over, straight alpha).
    pub fn over(self, dst: [u8; 4]) -> [u8; 4] {
        match self.a {
            0 => return dst,
            255 => return self.to_array(),
            _ => {}
        }

        let sa = self.alpha();
        let da = dst[3] as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return [0, 0, 0, 0];
        }

        let mix = |s: u8, d: u8| -> u8 {
            let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            c.round().clamp(0.0, 255.0) as u8
        };

        [
            mix(self.r, dst[0]),
            mix(self.g, dst[1]),
            mix(self.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(rgba: [u8; 4]) -> Self {
        Self::from_array(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_rounds_to_nearest() {
        assert_eq!(Rgba::with_alpha(59, 130, 246, 0.5).a, 128);
        assert_eq!(Rgba::with_alpha(1, 2, 3, 1.0).a, 255);
        assert_eq!(Rgba::with_alpha(1, 2, 3, 0.0).a, 0);
    }

    #[test]
    fn test_with_alpha_clamps_out_of_range() {
        assert_eq!(Rgba::with_alpha(0, 0, 0, 3.0).a, 255);
        assert_eq!(Rgba::with_alpha(0, 0, 0, -1.0).a, 0);
    }

    #[test]
    fn test_opaque_source_replaces_destination() {
        let red = Rgba::opaque(255, 0, 0);
        assert_eq!(red.over([0, 0, 255, 255]), [255, 0, 0, 255]);
    }

    #[test]
    fn test_transparent_source_keeps_destination() {
        assert_eq!(Rgba::TRANSPARENT.over([10, 20, 30, 40]), [10, 20, 30, 40]);
    }

    #[test]
    fn test_half_alpha_over_opaque_mixes_evenly() {
        let white = Rgba::new(255, 255, 255, 128);
        let out = white.over([0, 0, 0, 255]);
        assert!((i32::from(out[0]) - 128).abs() <= 1);
        assert_eq!(out[3], 255);
    }

    #[test]
    fn test_over_transparent_keeps_source_color() {
        let blue = Rgba::with_alpha(59, 130, 246, 0.5);
        let out = blue.over([0, 0, 0, 0]);
        assert_eq!(&out[..3], &[59, 130, 246]);
        assert_eq!(out[3], blue.a);
    }
}
