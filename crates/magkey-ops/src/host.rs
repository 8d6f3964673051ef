//! Parameter ownership on the host side of the kernel.
//!
//! [`ParameterHost`] plays the role of the filter object in an effect
//! framework: it owns the current [`KernelParameters`], exposes setters that
//! store new values without validation, and replays every value on
//! [`initialize`](ParameterHost::initialize) so a freshly created pipeline
//! can bind them.
//!
//! Observability is injected through [`ParameterObserver`]. The kernel itself
//! never logs; [`TracingObserver`] reports threshold updates through
//! `tracing`.
//!
//! # Example
//!
//! ```rust
//! use magkey_core::{Color3, Pixel};
//! use magkey_ops::{ParameterHost, TracingObserver};
//!
//! let mut host = ParameterHost::new(Color3::GREEN).with_observer(TracingObserver);
//! host.initialize();
//! host.set_threshold_sensitivity(0.25);
//!
//! let src = |u: f32, v: f32| Pixel::new(u, v, 0.0, 1.0);
//! let out = host.render(&src, 8, 8).unwrap();
//! assert_eq!(out.dimensions(), (8, 8));
//! ```

use crate::{parallel, KernelParameters, OpsResult, Variant};
use magkey_core::{Color3, RgbaImage, SampledImage};
use tracing::{debug, trace};

/// A single parameter update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterChange {
    /// New threshold sensitivity.
    ThresholdSensitivity(f32),
    /// New smoothing band width.
    Smoothing(f32),
    /// New magnification factor.
    Magnification(f32),
    /// New key color.
    ColorToReplace(Color3),
    /// New blend variant.
    Variant(Variant),
}

/// Hook notified after every stored parameter change.
pub trait ParameterObserver: Send + Sync {
    /// Called with the value just stored.
    fn on_change(&self, change: &ParameterChange);
}

impl<F> ParameterObserver for F
where
    F: Fn(&ParameterChange) + Send + Sync,
{
    fn on_change(&self, change: &ParameterChange) {
        self(change)
    }
}

/// Logs parameter updates: threshold sensitivity at debug level, the rest at
/// trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ParameterObserver for TracingObserver {
    fn on_change(&self, change: &ParameterChange) {
        match change {
            ParameterChange::ThresholdSensitivity(value) => {
                debug!(threshold_sensitivity = value, "Threshold sensitivity updated");
            }
            other => trace!(change = ?other, "Parameter updated"),
        }
    }
}

/// Owner of the current parameter values.
#[derive(Default)]
pub struct ParameterHost {
    params: KernelParameters,
    observer: Option<Box<dyn ParameterObserver>>,
}

impl ParameterHost {
    /// Default parameters with the given key color.
    pub fn new(color_to_replace: Color3) -> Self {
        Self::from_params(KernelParameters::new(color_to_replace))
    }

    /// Start from an existing snapshot.
    pub fn from_params(params: KernelParameters) -> Self {
        Self {
            params,
            observer: None,
        }
    }

    /// Attach an observer, replacing any previous one.
    pub fn with_observer(mut self, observer: impl ParameterObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    fn notify(&self, change: ParameterChange) {
        if let Some(observer) = &self.observer {
            observer.on_change(&change);
        }
    }

    /// Replay every current value to the observer.
    ///
    /// Order: smoothing, magnification, threshold sensitivity, color to
    /// replace, variant.
    pub fn initialize(&self) {
        let p = self.params;
        self.notify(ParameterChange::Smoothing(p.smoothing));
        self.notify(ParameterChange::Magnification(p.magnification));
        self.notify(ParameterChange::ThresholdSensitivity(p.threshold_sensitivity));
        self.notify(ParameterChange::ColorToReplace(p.color_to_replace));
        self.notify(ParameterChange::Variant(p.variant));
    }

    /// Set how similar a color must be to the key to be replaced.
    pub fn set_threshold_sensitivity(&mut self, value: f32) {
        self.params.threshold_sensitivity = value;
        self.notify(ParameterChange::ThresholdSensitivity(value));
    }

    /// Set how gradually similar colors are replaced.
    pub fn set_smoothing(&mut self, value: f32) {
        self.params.smoothing = value;
        self.notify(ParameterChange::Smoothing(value));
    }

    /// Set the coordinate scale around the frame center.
    pub fn set_magnification(&mut self, value: f32) {
        self.params.magnification = value;
        self.notify(ParameterChange::Magnification(value));
    }

    /// Set the key color from normalized components.
    pub fn set_color_to_replace(&mut self, red: f32, green: f32, blue: f32) {
        let color = Color3::new(red, green, blue);
        self.params.color_to_replace = color;
        self.notify(ParameterChange::ColorToReplace(color));
    }

    /// Select the blend variant.
    pub fn set_variant(&mut self, variant: Variant) {
        self.params.variant = variant;
        self.notify(ParameterChange::Variant(variant));
    }

    /// Current values.
    pub fn params(&self) -> &KernelParameters {
        &self.params
    }

    /// Copy of the current values, detached from later setter calls.
    pub fn snapshot(&self) -> KernelParameters {
        self.params
    }

    /// Evaluate a full `width x height` image with a snapshot of the current
    /// parameters.
    pub fn render<S>(&self, image: &S, width: u32, height: u32) -> OpsResult<RgbaImage>
    where
        S: SampledImage + Sync + ?Sized,
    {
        let params = self.snapshot();
        parallel::render(image, width, height, &params)
    }
}

impl std::fmt::Debug for ParameterHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterHost")
            .field("params", &self.params)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
