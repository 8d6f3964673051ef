//! # magkey-math
//!
//! Scalar helpers that reproduce GLSL/WGSL built-in semantics on the CPU:
//!
//! - [`step`] - hard threshold
//! - [`smoothstep`] - cubic Hermite transition, defined for degenerate edges
//! - [`mix`] / [`lerp`] - linear blend
//! - [`saturate`], [`inverse_lerp`] - clamping and remapping
//!
//! 2D coordinates and chroma pairs use [`Vec2`] from [`glam`].
//!
//! # Usage
//!
//! ```rust
//! use magkey_math::{mix, smoothstep, step, Vec2};
//!
//! assert_eq!(step(0.3, 0.5), 1.0);
//! assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
//! assert_eq!(mix(0.0, 10.0, 0.25), 2.5);
//!
//! let d = Vec2::new(0.0, 0.0).distance(Vec2::new(3.0, 4.0));
//! assert_eq!(d, 5.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod interp;

pub use interp::*;

pub use glam::Vec2;
