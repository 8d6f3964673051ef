//! # magkey-core
//!
//! Core types for the magnify chroma-key effect.
//!
//! - [`Pixel`], [`Color3`] - `f32` color values, unclamped like GPU arithmetic
//! - [`SampledImage`] - normalized-coordinate sampling, the kernel's only
//!   view of its source
//! - [`RgbaImage`] - owned interleaved RGBA buffer with a configurable
//!   [`Sampler`] ([`Filter`], [`WrapMode`])
//! - [`Error`], [`Result`] - buffer construction and bounds errors
//!
//! ## Crate Structure
//!
//! ```text
//! magkey-core (this crate)
//!    ^
//!    |
//!    +-- magkey-ops (kernel, parameters, full-image passes)
//!    +-- magkey-bench
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize [`Color3`] as an `[r, g, b]` array

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;
pub mod sample;

pub use error::{Error, Result};
pub use image::{RgbaImage, CHANNELS};
pub use pixel::{Color3, Pixel};
pub use sample::{Filter, SampledImage, Sampler, WrapMode};

/// Prelude module for convenient imports.
///
/// ```
/// use magkey_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::image::RgbaImage;
    pub use crate::pixel::{Color3, Pixel};
    pub use crate::sample::{Filter, SampledImage, Sampler, WrapMode};
}
