//! Full-image evaluation of the kernel.
//!
//! Every output pixel `(x, y)` is evaluated at its center coordinate
//! `((x + 0.5) / width, (y + 0.5) / height)`. Rows are independent; with the
//! `parallel` feature they are distributed over the rayon pool, otherwise a
//! single-threaded loop runs the same per-row code.
//!
//! The parameter snapshot and source are shared read-only by all workers.
//!
//! # Example
//!
//! ```rust
//! use magkey_core::{Color3, Pixel, RgbaImage};
//! use magkey_ops::{parallel, KernelParameters};
//!
//! let img = RgbaImage::filled(64, 64, Pixel::new(1.0, 0.0, 0.0, 1.0));
//! let params = KernelParameters::new(Color3::GREEN);
//! let out = parallel::magnify_key(&img, &params).unwrap();
//! assert_eq!(out.dimensions(), (64, 64));
//! ```

use crate::{kernel, KernelParameters, OpsError, OpsResult};
use magkey_core::{RgbaImage, SampledImage, CHANNELS};
use magkey_math::Vec2;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Normalized coordinate of the center of pixel `(x, y)`.
#[inline]
pub fn pixel_center(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    Vec2::new(
        (x as f32 + 0.5) / width as f32,
        (y as f32 + 0.5) / height as f32,
    )
}

/// Component count for a `width x height` RGBA buffer, with overflow checks.
fn buffer_len(width: u32, height: u32) -> OpsResult<usize> {
    if width == 0 || height == 0 {
        return Err(OpsError::InvalidDimensions(
            "width and height must be > 0".into(),
        ));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or_else(|| OpsError::InvalidDimensions("image dimensions overflow".into()))
}

/// Evaluate one output row into `row` (`width * 4` components).
fn shade_row<S>(image: &S, y: u32, width: u32, height: u32, params: &KernelParameters, row: &mut [f32])
where
    S: SampledImage + ?Sized,
{
    for (x, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
        let uv = pixel_center(x as u32, y, width, height);
        let px = kernel::evaluate(image, uv.x, uv.y, params);
        out.copy_from_slice(&px.to_array());
    }
}

/// Evaluate the kernel over a `width x height` grid into `dst`.
///
/// # Errors
///
/// - [`OpsError::InvalidDimensions`] for zero or overflowing dimensions
/// - [`OpsError::SizeMismatch`] if `dst.len() != width * height * 4`
pub fn render_into<S>(
    image: &S,
    width: u32,
    height: u32,
    params: &KernelParameters,
    dst: &mut [f32],
) -> OpsResult<()>
where
    S: SampledImage + Sync + ?Sized,
{
    let expected = buffer_len(width, height)?;
    if dst.len() != expected {
        return Err(OpsError::SizeMismatch(format!(
            "expected {} components, got {}",
            expected,
            dst.len()
        )));
    }

    trace!(width, height, variant = ?params.variant, "magkey::render");
    debug!(
        width,
        height,
        threshold = params.threshold_sensitivity,
        smoothing = params.smoothing,
        magnification = params.magnification,
        "Rendering magnify chroma key"
    );

    let row_len = width as usize * CHANNELS;

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| shade_row(image, y as u32, width, height, params, row));

    #[cfg(not(feature = "parallel"))]
    dst.chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| shade_row(image, y as u32, width, height, params, row));

    Ok(())
}

/// Evaluate the kernel over a `width x height` grid.
///
/// The output size is independent of the source; any [`SampledImage`] works.
pub fn render<S>(image: &S, width: u32, height: u32, params: &KernelParameters) -> OpsResult<RgbaImage>
where
    S: SampledImage + Sync + ?Sized,
{
    let mut data = vec![0.0f32; buffer_len(width, height)?];
    render_into(image, width, height, params, &mut data)?;
    Ok(RgbaImage::from_data(width, height, data)?)
}

/// Apply the effect to an image at its own resolution, sampling it bilinearly
/// with clamp-to-edge addressing.
pub fn magnify_key(image: &RgbaImage, params: &KernelParameters) -> OpsResult<RgbaImage> {
    render(&image.sampler(), image.width(), image.height(), params)
}
