//! Normalized-coordinate sampling.
//!
//! [`SampledImage`] is the only view the kernel has of its source: a 2D field
//! of [`Pixel`] addressed by `(u, v)` in [0, 1] x [0, 1]. What happens outside
//! that square (clamp, wrap, transparent black) is up to the implementation.
//!
//! Implementations:
//!
//! - [`Sampler`] over an [`RgbaImage`](crate::RgbaImage), with [`Filter`] and
//!   [`WrapMode`] mirroring texture sampler state.
//! - Any `Fn(f32, f32) -> Pixel` closure, for procedural sources.
//!
//! # Example
//!
//! ```rust
//! use magkey_core::{Pixel, SampledImage};
//!
//! let gradient = |u: f32, _v: f32| Pixel::new(u, u, u, 1.0);
//! assert_eq!(gradient.sample(0.25, 0.9).r, 0.25);
//! ```

use crate::{Pixel, RgbaImage};

/// A 2D field of pixels sampled by normalized coordinate.
pub trait SampledImage {
    /// Sample at `(u, v)`. Never fails; out-of-range policy is
    /// implementation-defined.
    fn sample(&self, u: f32, v: f32) -> Pixel;
}

impl<F> SampledImage for F
where
    F: Fn(f32, f32) -> Pixel,
{
    #[inline]
    fn sample(&self, u: f32, v: f32) -> Pixel {
        self(u, v)
    }
}

/// Texel reconstruction filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Nearest texel.
    Nearest,
    /// Bilinear interpolation between the four nearest texel centers.
    #[default]
    Bilinear,
}

/// Addressing mode for coordinates outside [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WrapMode {
    /// Repeat the edge texel.
    #[default]
    Clamp,
    /// Tile the image.
    Repeat,
    /// Transparent black outside the image.
    Black,
}

/// Sampler state bound to an image.
///
/// Texel centers sit at `((x + 0.5) / width, (y + 0.5) / height)`, so
/// sampling at a pixel center returns that texel for both filters.
#[derive(Debug, Clone, Copy)]
pub struct Sampler<'a> {
    image: &'a RgbaImage,
    filter: Filter,
    wrap: WrapMode,
}

impl<'a> Sampler<'a> {
    /// Bilinear, clamp-to-edge sampler.
    pub fn new(image: &'a RgbaImage) -> Self {
        Self {
            image,
            filter: Filter::default(),
            wrap: WrapMode::default(),
        }
    }

    /// Set the reconstruction filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the wrap mode.
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Current filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Current wrap mode.
    pub fn wrap(&self) -> WrapMode {
        self.wrap
    }

    /// Fetch a texel by signed integer coordinate, applying the wrap mode.
    fn texel(&self, x: i64, y: i64) -> Pixel {
        let w = self.image.width() as i64;
        let h = self.image.height() as i64;
        let (x, y) = match self.wrap {
            WrapMode::Clamp => (x.clamp(0, w - 1), y.clamp(0, h - 1)),
            WrapMode::Repeat => (x.rem_euclid(w), y.rem_euclid(h)),
            WrapMode::Black => {
                if x < 0 || y < 0 || x >= w || y >= h {
                    return Pixel::ZERO;
                }
                (x, y)
            }
        };
        self.image.pixel(x as u32, y as u32)
    }

    fn sample_nearest(&self, u: f32, v: f32) -> Pixel {
        let x = (u * self.image.width() as f32).floor() as i64;
        let y = (v * self.image.height() as f32).floor() as i64;
        self.texel(x, y)
    }

    fn sample_bilinear(&self, u: f32, v: f32) -> Pixel {
        let fx = u * self.image.width() as f32 - 0.5;
        let fy = v * self.image.height() as f32 - 0.5;
        let x0 = fx.floor();
        let y0 = fy.floor();
        let tx = fx - x0;
        let ty = fy - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let p00 = self.texel(x0, y0);
        let (x1, y1) = (x0.saturating_add(1), y0.saturating_add(1));
        let p10 = self.texel(x1, y0);
        let p01 = self.texel(x0, y1);
        let p11 = self.texel(x1, y1);

        let top = p00.mix(p10, tx);
        let bot = p01.mix(p11, tx);
        top.mix(bot, ty)
    }
}

impl SampledImage for Sampler<'_> {
    fn sample(&self, u: f32, v: f32) -> Pixel {
        if self.image.is_empty() {
            return Pixel::ZERO;
        }
        match self.filter {
            Filter::Nearest => self.sample_nearest(u, v),
            Filter::Bilinear => self.sample_bilinear(u, v),
        }
    }
}

/// Images sample through their default (bilinear, clamp) sampler.
impl SampledImage for RgbaImage {
    fn sample(&self, u: f32, v: f32) -> Pixel {
        self.sampler().sample(u, v)
    }
}
