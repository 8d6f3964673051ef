//! # magkey-ops
//!
//! Magnify chroma-key effect: pixels close to a key color are replaced by a
//! zoomed sample of the same image, blended by chroma similarity.
//!
//! # Modules
//!
//! - [`kernel`] - the per-pixel function and its color math
//! - [`params`] - [`KernelParameters`], [`Variant`], key color defaults, YAML config
//! - [`host`] - [`ParameterHost`], setters with an injectable observer
//! - [`parallel`] - full-image passes (rayon when `parallel` is enabled)
//! - [`shader`] - WGSL source and uniform block for GPU pipelines
//!
//! # Example
//!
//! ```rust
//! use magkey_core::{Color3, Pixel, RgbaImage};
//! use magkey_ops::{parallel, KernelParameters, KeyColorDefault, Variant};
//!
//! let img = RgbaImage::from_fn(32, 32, |x, _| {
//!     if x < 16 { Pixel::new(0.0, 1.0, 0.0, 1.0) } else { Pixel::new(0.8, 0.2, 0.1, 1.0) }
//! });
//!
//! let params = KernelParameters::with_key_default(KeyColorDefault::Documented)
//!     .with_variant(Variant::Refactored);
//! let out = parallel::magnify_key(&img, &params).unwrap();
//! assert_eq!(out.dimensions(), (32, 32));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod host;
pub mod kernel;
pub mod parallel;
pub mod params;
pub mod shader;

pub use error::{OpsError, OpsResult};
pub use host::{ParameterChange, ParameterHost, ParameterObserver, TracingObserver};
pub use kernel::{evaluate, LumaChroma, MagnifyChromaKeyKernel};
pub use params::{
    KernelParameters, KeyColorDefault, Variant, CONSTRUCTION_COLOR_TO_REPLACE,
    DOCUMENTED_COLOR_TO_REPLACE,
};
pub use shader::MagKeyUniforms;
