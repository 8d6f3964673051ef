//! Magnify chroma-key pixel kernel.
//!
//! For an output coordinate `uv` the kernel samples the source twice, once at
//! `uv` and once at the magnified coordinate, and compares both samples with
//! the key color in a luma/chroma space:
//!
//! ```text
//! texture   = image(uv)
//! mag       = image(0.5 + (uv - 0.5) * magnification)
//! texture  *= step(threshold, |chroma(texture) - chroma(key)|)
//! blend     = 1 - smoothstep(threshold, threshold + smoothing, |chroma(mag) - chroma(key)|)
//! out       = mix(texture, mag, blend * variant.blend_scale())
//! ```
//!
//! Nothing is clamped. The function is pure, so full images can be evaluated
//! in any order and on any number of threads (see [`crate::parallel`]).
//!
//! # Example
//!
//! ```rust
//! use magkey_core::{Color3, Pixel};
//! use magkey_ops::{kernel, KernelParameters};
//!
//! // Far from the key everywhere: passthrough
//! let red = |_u: f32, _v: f32| Pixel::new(1.0, 0.0, 0.0, 1.0);
//! let params = KernelParameters::new(Color3::BLUE).with_threshold_sensitivity(0.05);
//! let out = kernel::evaluate(&red, 0.3, 0.6, &params);
//! assert!((out.r - 1.0).abs() < 1e-5);
//! ```

use crate::KernelParameters;
use magkey_core::{Color3, Pixel, SampledImage};
use magkey_math::{smoothstep, step, Vec2};

/// Luma weight of red.
pub const LUMA_R: f32 = 0.2989;
/// Luma weight of green.
pub const LUMA_G: f32 = 0.5866;
/// Luma weight of blue.
pub const LUMA_B: f32 = 0.1145;
/// Scale of the red color difference.
pub const CR_SCALE: f32 = 0.7132;
/// Scale of the blue color difference.
pub const CB_SCALE: f32 = 0.5647;

/// Center of the frame in normalized coordinates.
pub const CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// Luma plus red/blue color difference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LumaChroma {
    /// Luma.
    pub y: f32,
    /// Red difference.
    pub cr: f32,
    /// Blue difference.
    pub cb: f32,
}

impl LumaChroma {
    /// `(Cr, Cb)` pair.
    #[inline]
    pub fn chroma(self) -> Vec2 {
        Vec2::new(self.cr, self.cb)
    }
}

/// YCrCb-like transform with fixed coefficients.
///
/// ```text
/// Y  = 0.2989 R + 0.5866 G + 0.1145 B
/// Cr = 0.7132 (R - Y)
/// Cb = 0.5647 (B - Y)
/// ```
#[inline]
pub fn luma_chroma(c: Color3) -> LumaChroma {
    let y = LUMA_R * c.r + LUMA_G * c.g + LUMA_B * c.b;
    LumaChroma {
        y,
        cr: CR_SCALE * (c.r - y),
        cb: CB_SCALE * (c.b - y),
    }
}

/// Euclidean distance between two `(Cr, Cb)` pairs.
#[inline]
pub fn chroma_distance(a: LumaChroma, b: LumaChroma) -> f32 {
    a.chroma().distance(b.chroma())
}

/// Scale `uv` around the frame center. Not clamped to [0, 1].
#[inline]
pub fn magnified_coordinate(uv: Vec2, magnification: f32) -> Vec2 {
    CENTER + (uv - CENTER) * magnification
}

/// Weight of the magnified sample before variant scaling.
///
/// 1 at or below `threshold`, 0 at or above `threshold + smoothing`,
/// non-increasing in between. With `smoothing == 0` this is a hard step
/// that drops to 0 once `mag_distance` reaches `threshold`.
#[inline]
pub fn blend_factor(threshold: f32, smoothing: f32, mag_distance: f32) -> f32 {
    1.0 - smoothstep(threshold, threshold + smoothing, mag_distance)
}

/// Combine already-sampled texture and magnified colors.
///
/// Split from [`evaluate`] so pipelines that fetch texels themselves
/// (batched or shader-side) share the exact same math.
pub fn shade(texture: Pixel, mag: Pixel, params: &KernelParameters) -> Pixel {
    let key = luma_chroma(params.color_to_replace);
    let threshold = params.threshold_sensitivity;

    let src_distance = chroma_distance(luma_chroma(texture.rgb()), key);
    let texture = texture.scale(step(threshold, src_distance));

    let mag_distance = chroma_distance(luma_chroma(mag.rgb()), key);
    let blend = blend_factor(threshold, params.smoothing, mag_distance);

    texture.mix(mag, blend * params.variant.blend_scale())
}

/// Evaluate the kernel at normalized coordinate `(u, v)`.
pub fn evaluate<S>(image: &S, u: f32, v: f32, params: &KernelParameters) -> Pixel
where
    S: SampledImage + ?Sized,
{
    let texture = image.sample(u, v);
    let mag_uv = magnified_coordinate(Vec2::new(u, v), params.magnification);
    let mag = image.sample(mag_uv.x, mag_uv.y);
    shade(texture, mag, params)
}

/// Stateless kernel handle bound to a parameter snapshot.
///
/// Convenience for call sites that evaluate many coordinates with the same
/// parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagnifyChromaKeyKernel {
    params: KernelParameters,
}

impl MagnifyChromaKeyKernel {
    /// Bind a parameter snapshot.
    pub fn new(params: KernelParameters) -> Self {
        Self { params }
    }

    /// The bound parameters.
    pub fn params(&self) -> &KernelParameters {
        &self.params
    }

    /// Evaluate at `(u, v)`.
    #[inline]
    pub fn evaluate<S: SampledImage + ?Sized>(&self, image: &S, u: f32, v: f32) -> Pixel {
        evaluate(image, u, v, &self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Variant;
    use approx::assert_relative_eq;

    #[test]
    fn test_luma_chroma_red() {
        let lc = luma_chroma(Color3::RED);
        assert_relative_eq!(lc.y, 0.2989, epsilon = 1e-6);
        assert_relative_eq!(lc.cr, 0.7132 * (1.0 - 0.2989), epsilon = 1e-6);
        assert_relative_eq!(lc.cb, 0.5647 * (0.0 - 0.2989), epsilon = 1e-6);
        assert_relative_eq!(lc.cr, 0.50002, epsilon = 1e-4);
        assert_relative_eq!(lc.cb, -0.16879, epsilon = 1e-4);
    }

    #[test]
    fn test_luma_chroma_gray_has_no_chroma() {
        // Weights sum to 1.0, so grays sit at the chroma origin
        let lc = luma_chroma(Color3::new(0.5, 0.5, 0.5));
        assert_relative_eq!(lc.y, 0.5, epsilon = 1e-6);
        assert_relative_eq!(lc.cr, 0.0, epsilon = 1e-6);
        assert_relative_eq!(lc.cb, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_chroma_distance_symmetric() {
        let a = luma_chroma(Color3::RED);
        let b = luma_chroma(Color3::GREEN);
        assert_eq!(chroma_distance(a, b), chroma_distance(b, a));
        assert_eq!(chroma_distance(a, a), 0.0);
    }

    #[test]
    fn test_chroma_distance_ignores_luma() {
        let dark = luma_chroma(Color3::new(0.2, 0.2, 0.2));
        let light = luma_chroma(Color3::new(0.9, 0.9, 0.9));
        assert_relative_eq!(chroma_distance(dark, light), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_magnified_coordinate() {
        let m = magnified_coordinate(Vec2::new(1.0, 0.0), 0.3);
        assert_relative_eq!(m.x, 0.65, epsilon = 1e-6);
        assert_relative_eq!(m.y, 0.35, epsilon = 1e-6);

        // Center is a fixed point
        assert_eq!(magnified_coordinate(CENTER, 0.3), CENTER);

        // Zoom out leaves [0, 1] unclamped
        let out = magnified_coordinate(Vec2::new(1.0, 1.0), 3.0);
        assert_relative_eq!(out.x, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_blend_factor_edges() {
        assert_eq!(blend_factor(0.3, 0.1, 0.0), 1.0);
        assert_eq!(blend_factor(0.3, 0.1, 0.3), 1.0);
        assert_eq!(blend_factor(0.3, 0.1, 0.4), 0.0);
        assert_eq!(blend_factor(0.3, 0.1, 2.0), 0.0);
        let mid = blend_factor(0.3, 0.1, 0.35);
        assert_relative_eq!(mid, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_shade_suppresses_key_colored_source() {
        let key = Pixel::new(0.0, 1.0, 0.0, 1.0);
        let far = Pixel::new(1.0, 0.0, 0.0, 1.0);
        let params = KernelParameters::new(Color3::GREEN);
        // Source is key-colored, magnified sample is far: source zeroed, blend 0
        let out = shade(key, far, &params);
        assert_eq!(out, Pixel::ZERO);
    }

    #[test]
    fn test_shade_refactored_caps_weight() {
        let texture = Pixel::new(1.0, 0.0, 0.0, 1.0);
        let mag = Pixel::new(0.0, 1.0, 0.0, 1.0);
        let params = KernelParameters::new(Color3::GREEN).with_variant(Variant::Refactored);
        let out = shade(texture, mag, &params);
        assert_relative_eq!(out.r, 0.3, epsilon = 1e-6);
        assert_relative_eq!(out.g, 0.7, epsilon = 1e-6);
        assert_relative_eq!(out.a, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_kernel_handle_matches_free_fn() {
        let src = |u: f32, v: f32| Pixel::new(u, v, 1.0 - u, 1.0);
        let params = KernelParameters::new(Color3::BLUE).with_magnification(0.6);
        let kernel = MagnifyChromaKeyKernel::new(params);
        for &(u, v) in &[(0.1, 0.2), (0.5, 0.5), (0.9, 0.7)] {
            assert_eq!(kernel.evaluate(&src, u, v), evaluate(&src, u, v, &params));
        }
    }

    #[test]
    fn test_nan_propagates() {
        let src = |_u: f32, _v: f32| Pixel::new(f32::NAN, 0.0, 0.0, 1.0);
        let out = evaluate(&src, 0.5, 0.5, &KernelParameters::default());
        assert!(out.r.is_nan());
    }
}
