//! Owned RGBA `f32` image buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored row-major, top-to-bottom, with interleaved channels:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! # Usage
//!
//! ```rust
//! use magkey_core::{Pixel, RgbaImage};
//!
//! let mut img = RgbaImage::new(64, 32);
//! img.set_pixel(10, 5, Pixel::new(1.0, 0.5, 0.25, 1.0));
//! assert_eq!(img.pixel(10, 5).g, 0.5);
//! ```

use crate::{Error, Pixel, Result, Sampler};
use std::sync::Arc;

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 4;

/// Component count of a `width x height` RGBA buffer, `None` on overflow.
fn component_count(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
}

fn checked_len(width: u32, height: u32) -> usize {
    match component_count(width, height) {
        Some(len) => len,
        None => panic!("image dimensions {width}x{height} overflow"),
    }
}

/// Owned RGBA image with `f32` components.
///
/// The buffer sits behind an [`Arc`], so cloning is cheap and clones can be
/// shared across worker threads. Mutation copies on write.
#[derive(Clone)]
pub struct RgbaImage {
    data: Arc<Vec<f32>>,
    width: u32,
    height: u32,
}

impl RgbaImage {
    /// Creates an image filled with transparent black.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize` or allocation fails.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::ZERO)
    }

    /// Creates an image where every pixel is `pixel`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let len = checked_len(width, height);
        let px = pixel.to_array();
        let mut data = Vec::with_capacity(len);
        for _ in 0..len / CHANNELS {
            data.extend_from_slice(&px);
        }
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Creates an image by evaluating `f(x, y)` for every pixel.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 4` overflows `usize`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Pixel,
    {
        let mut data = Vec::with_capacity(checked_len(width, height));
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y).to_array());
            }
        }
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    /// Wraps existing interleaved RGBA data.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidDimensions`] if either dimension is zero or the
    ///   component count overflows `usize`
    /// - [`Error::DataLength`] if `data.len() != width * height * 4`
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "width and height must be > 0"));
        }
        let expected = component_count(width, height)
            .ok_or_else(|| Error::invalid_dimensions(width, height, "image dimensions overflow"))?;
        if data.len() != expected {
            return Err(Error::DataLength {
                expected,
                got: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// `true` when the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw interleaved data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raw data (copies if shared).
    pub fn data_mut(&mut self) -> &mut [f32] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Consumes the image and returns the raw data.
    pub fn into_data(self) -> Vec<f32> {
        Arc::try_unwrap(self.data).unwrap_or_else(|shared| (*shared).clone())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = self.index(x, y);
        Pixel::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        (x < self.width && y < self.height).then(|| self.pixel(x, y))
    }

    /// Bounds-checked pixel access returning an [`Error`].
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        self.get_pixel(x, y)
            .ok_or_else(|| Error::out_of_bounds(x, y, self.width, self.height))
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = self.index(x, y);
        self.data_mut()[i..i + CHANNELS].copy_from_slice(&pixel.to_array());
    }

    /// Iterates `(x, y, pixel)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Pixel)> + '_ {
        let w = self.width;
        self.data
            .chunks_exact(CHANNELS)
            .enumerate()
            .map(move |(i, px)| {
                let i = i as u32;
                (i % w, i / w, Pixel::new(px[0], px[1], px[2], px[3]))
            })
    }

    /// Bilinear, clamp-to-edge sampler over this image.
    pub fn sampler(&self) -> Sampler<'_> {
        Sampler::new(self)
    }
}

impl std::fmt::Debug for RgbaImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbaImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
