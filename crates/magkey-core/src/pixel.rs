//! Pixel and color value types.
//!
//! - [`Pixel`] - RGBA, 4 x `f32`
//! - [`Color3`] - RGB without alpha, used for key colors
//!
//! Components are normalized by convention but never clamped: arithmetic
//! follows a GPU pipeline, so intermediate values may leave [0, 1].
//!
//! # Memory Layout
//!
//! Both types are `#[repr(C)]` so slices of pixels line up with interleaved
//! `f32` buffers.

use std::fmt;

/// RGBA pixel with `f32` components.
///
/// # Example
///
/// ```
/// use magkey_core::Pixel;
///
/// let a = Pixel::new(1.0, 0.0, 0.0, 1.0);
/// let b = Pixel::new(0.0, 0.0, 1.0, 1.0);
/// let mid = a.mix(b, 0.5);
/// assert_eq!(mid.to_array(), [0.5, 0.0, 0.5, 1.0]);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Pixel {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Pixel {
    /// All four components zero (transparent black).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new pixel.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pixel from an RGB color.
    #[inline]
    pub const fn opaque(rgb: Color3) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, 1.0)
    }

    /// Components as `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// The color part, alpha dropped.
    #[inline]
    pub const fn rgb(self) -> Color3 {
        Color3::new(self.r, self.g, self.b)
    }

    /// Multiply all four components by `s`.
    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.r * s, self.g * s, self.b * s, self.a * s)
    }

    /// Component-wise `self * (1 - t) + other * t`, alpha included.
    #[inline]
    pub fn mix(self, other: Self, t: f32) -> Self {
        let u = 1.0 - t;
        Self::new(
            self.r * u + other.r * t,
            self.g * u + other.g * t,
            self.b * u + other.b * t,
            self.a * u + other.a * t,
        )
    }
}

impl From<[f32; 4]> for Pixel {
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Pixel> for [f32; 4] {
    fn from(px: Pixel) -> Self {
        px.to_array()
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pixel({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Three-component RGB color.
///
/// Serializes as a plain `[r, g, b]` array when the `serde` feature is on.
///
/// # Example
///
/// ```
/// use magkey_core::Color3;
///
/// assert_eq!(Color3::GREEN.to_array(), [0.0, 1.0, 0.0]);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 3]", into = "[f32; 3]"))]
pub struct Color3 {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Color3 {
    /// Pure red `(1, 0, 0)`.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    /// Pure green `(0, 1, 0)`.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    /// Pure blue `(0, 0, 1)`.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a new color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Components as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from `[r, g, b]`.
    #[inline]
    pub const fn from_array(arr: [f32; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl From<[f32; 3]> for Color3 {
    fn from(arr: [f32; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Color3> for [f32; 3] {
    fn from(c: Color3) -> Self {
        c.to_array()
    }
}

impl fmt::Debug for Color3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color3({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_zeroes_alpha() {
        let px = Pixel::new(0.2, 0.4, 0.6, 1.0).scale(0.0);
        assert_eq!(px, Pixel::ZERO);
    }

    #[test]
    fn test_mix_endpoints() {
        let a = Pixel::new(0.1, 0.2, 0.3, 0.4);
        let b = Pixel::new(0.9, 0.8, 0.7, 0.6);
        assert_eq!(a.mix(b, 0.0), a);
        assert_eq!(a.mix(b, 1.0), b);
    }

    #[test]
    fn test_mix_same_color_invariant() {
        let a = Pixel::new(0.3, 0.6, 0.9, 1.0);
        for t in [0.0, 0.25, 0.7, 1.0] {
            let m = a.mix(a, t);
            assert_relative_eq!(m.r, a.r, epsilon = 1e-6);
            assert_relative_eq!(m.g, a.g, epsilon = 1e-6);
            assert_relative_eq!(m.b, a.b, epsilon = 1e-6);
            assert_relative_eq!(m.a, a.a, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_rgb_and_opaque() {
        let px = Pixel::opaque(Color3::BLUE);
        assert_eq!(px.rgb(), Color3::BLUE);
        assert_eq!(px.a, 1.0);
    }

    #[test]
    fn test_array_conversions() {
        let c: Color3 = [0.1, 0.2, 0.3].into();
        let back: [f32; 3] = c.into();
        assert_eq!(back, [0.1, 0.2, 0.3]);

        let p: Pixel = [0.1, 0.2, 0.3, 0.4].into();
        assert_eq!(p.b, 0.3);
    }
}
