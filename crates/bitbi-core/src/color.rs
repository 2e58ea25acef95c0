//! Color types and blending for the rain renderer.

use serde::{Deserialize, Serialize};

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend `tint` over this color at the given opacity.
    ///
    /// `alpha` is clamped to `0.0..=1.0`; `0.0` leaves the color
    /// unchanged and `1.0` replaces it with `tint`.
    pub fn mix(self, tint: Rgb, alpha: f32) -> Rgb {
        let alpha = alpha.clamp(0.0, 1.0);
        let channel = |base: u8, over: u8| {
            (f32::from(base) + (f32::from(over) - f32::from(base)) * alpha).round() as u8
        };
        Rgb {
            r: channel(self.r, tint.r),
            g: channel(self.g, tint.g),
            b: channel(self.b, tint.b),
        }
    }

    /// Whether every channel is within `tolerance` of `other`.
    pub fn close_to(self, other: Rgb, tolerance: u8) -> bool {
        self.r.abs_diff(other.r) <= tolerance
            && self.g.abs_diff(other.g) <= tolerance
            && self.b.abs_diff(other.b) <= tolerance
    }
}

/// A color with an opacity, used for translucent fills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub color: Rgb,
    pub alpha: f32,
}

impl Rgba {
    /// Create a translucent color.
    pub const fn new(color: Rgb, alpha: f32) -> Self {
        Self { color, alpha }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_at_zero_alpha_is_identity() {
        let base = Rgb::new(10, 14, 39);
        assert_eq!(base.mix(Rgb::new(255, 255, 255), 0.0), base);
    }

    #[test]
    fn mix_at_full_alpha_replaces() {
        let tint = Rgb::new(147, 51, 234);
        assert_eq!(Rgb::new(0, 0, 0).mix(tint, 1.0), tint);
    }

    #[test]
    fn mix_converges_toward_tint() {
        // Repeated low-alpha blends are what produce the fading trails,
        // so they must approach the tint rather than oscillate.
        let tint = Rgb::new(10, 14, 39);
        let mut color = Rgb::new(147, 51, 234);
        for _ in 0..400 {
            color = color.mix(tint, 0.05);
        }
        // Channel steps round to zero once within ten of the target, so
        // convergence lands in that band rather than on the tint itself.
        assert!(color.close_to(tint, 10));
    }

    #[test]
    fn mix_clamps_alpha() {
        let base = Rgb::new(100, 100, 100);
        let tint = Rgb::new(200, 200, 200);
        assert_eq!(base.mix(tint, 2.0), tint);
        assert_eq!(base.mix(tint, -1.0), base);
    }

    #[test]
    fn close_to_uses_per_channel_tolerance() {
        let a = Rgb::new(10, 14, 39);
        let b = Rgb::new(12, 12, 41);
        assert!(a.close_to(b, 2));
        assert!(!a.close_to(b, 1));
    }
}
