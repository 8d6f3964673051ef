//! Kernel parameters and their configuration format.
//!
//! [`KernelParameters`] is a plain `Copy` snapshot: the kernel reads it, never
//! writes it. Values are not range-checked; out-of-convention inputs (for
//! example negative smoothing) give defined but degenerate transitions.
//!
//! # Key color defaults
//!
//! Two defaults for the color to replace exist and both are exposed by name:
//!
//! - [`CONSTRUCTION_COLOR_TO_REPLACE`] (red), used by [`Default`]
//! - [`DOCUMENTED_COLOR_TO_REPLACE`] (green), the documented keying default
//!
//! Pick one explicitly with [`KernelParameters::with_key_default`].
//!
//! # Configuration
//!
//! Parameters load from YAML. Missing fields take their defaults:
//!
//! ```rust
//! use magkey_ops::{KernelParameters, Variant};
//!
//! let params = KernelParameters::from_yaml_str(
//!     "magnification: 0.5\ncolor_to_replace: [0.0, 1.0, 0.0]\nvariant: refactored\n",
//! ).unwrap();
//! assert_eq!(params.magnification, 0.5);
//! assert_eq!(params.smoothing, 0.1);
//! assert_eq!(params.variant, Variant::Refactored);
//! ```

use crate::shader::MagKeyUniforms;
use crate::OpsResult;
use magkey_core::Color3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default chroma distance below which the source pixel is suppressed.
pub const DEFAULT_THRESHOLD_SENSITIVITY: f32 = 0.3;

/// Default width of the smooth blend band.
pub const DEFAULT_SMOOTHING: f32 = 0.1;

/// Default coordinate scale around the frame center.
pub const DEFAULT_MAGNIFICATION: f32 = 0.3;

/// Key color assigned when parameters are constructed.
pub const CONSTRUCTION_COLOR_TO_REPLACE: Color3 = Color3::RED;

/// Key color described as the default keying behavior.
pub const DOCUMENTED_COLOR_TO_REPLACE: Color3 = Color3::GREEN;

/// Maximum weight of the magnified color in [`Variant::Refactored`].
pub const REFACTORED_BLEND_SCALE: f32 = 0.7;

/// Which blend formula the kernel runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// `mix(texture, mag, blend)`.
    #[default]
    Classic,
    /// `mix(texture, mag, blend * 0.7)`: the magnified color never fully
    /// replaces the source.
    Refactored,
}

impl Variant {
    /// Multiplier applied to the blend factor.
    #[inline]
    pub const fn blend_scale(self) -> f32 {
        match self {
            Self::Classic => 1.0,
            Self::Refactored => REFACTORED_BLEND_SCALE,
        }
    }
}

/// Named choice between the two key color defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyColorDefault {
    /// Red, [`CONSTRUCTION_COLOR_TO_REPLACE`].
    Construction,
    /// Green, [`DOCUMENTED_COLOR_TO_REPLACE`].
    Documented,
}

impl KeyColorDefault {
    /// The color this default stands for.
    pub const fn color(self) -> Color3 {
        match self {
            Self::Construction => CONSTRUCTION_COLOR_TO_REPLACE,
            Self::Documented => DOCUMENTED_COLOR_TO_REPLACE,
        }
    }
}

/// Immutable parameter snapshot for one kernel invocation or full pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelParameters {
    /// Chroma distance below which the source pixel is zeroed.
    pub threshold_sensitivity: f32,
    /// Width of the smooth transition band for the magnified sample.
    pub smoothing: f32,
    /// Scale applied to coordinates around `(0.5, 0.5)`.
    pub magnification: f32,
    /// Reference ("key") color.
    pub color_to_replace: Color3,
    /// Blend formula.
    pub variant: Variant,
}

impl Default for KernelParameters {
    fn default() -> Self {
        Self {
            threshold_sensitivity: DEFAULT_THRESHOLD_SENSITIVITY,
            smoothing: DEFAULT_SMOOTHING,
            magnification: DEFAULT_MAGNIFICATION,
            color_to_replace: CONSTRUCTION_COLOR_TO_REPLACE,
            variant: Variant::default(),
        }
    }
}

impl KernelParameters {
    /// Defaults with the given key color.
    pub fn new(color_to_replace: Color3) -> Self {
        Self {
            color_to_replace,
            ..Self::default()
        }
    }

    /// Defaults with one of the named key color defaults.
    pub fn with_key_default(key: KeyColorDefault) -> Self {
        Self::new(key.color())
    }

    /// Set the threshold sensitivity.
    pub fn with_threshold_sensitivity(mut self, value: f32) -> Self {
        self.threshold_sensitivity = value;
        self
    }

    /// Set the smoothing band width.
    pub fn with_smoothing(mut self, value: f32) -> Self {
        self.smoothing = value;
        self
    }

    /// Set the magnification factor.
    pub fn with_magnification(mut self, value: f32) -> Self {
        self.magnification = value;
        self
    }

    /// Set the key color.
    pub fn with_color_to_replace(mut self, color: Color3) -> Self {
        self.color_to_replace = color;
        self
    }

    /// Set the blend variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Parse from YAML.
    pub fn from_yaml_str(yaml: &str) -> OpsResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> OpsResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading kernel parameters");
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Uniform block for a shader pipeline.
    pub fn uniforms(&self) -> MagKeyUniforms {
        MagKeyUniforms::from(self)
    }
}
