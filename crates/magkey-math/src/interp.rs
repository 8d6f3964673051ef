//! Interpolation and threshold functions with shader semantics.
//!
//! Everything here operates on unclamped `f32` the way a GPU does: inputs
//! outside the nominal range are extrapolated, NaN propagates.

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a * (1 - t) + b * t`
///
/// This form (rather than `a + (b - a) * t`) returns `b` exactly at `t = 1`
/// and matches the GLSL `mix` definition.
///
/// # Example
///
/// ```rust
/// use magkey_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Mix: alias for [`lerp`], named after the shader built-in.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    lerp(a, b, t)
}

/// Inverse linear interpolation.
///
/// Given a value between `a` and `b`, returns the corresponding `t` value.
/// Not defined for `a == b`; callers handle that case.
///
/// # Example
///
/// ```rust
/// use magkey_math::inverse_lerp;
///
/// assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
/// ```
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    (value - a) / (b - a)
}

/// Clamp to [0, 1].
#[inline]
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Step function.
///
/// Returns 0 for `x < edge`, 1 otherwise (including `x == edge`).
///
/// # Example
///
/// ```rust
/// use magkey_math::step;
///
/// assert_eq!(step(0.5, 0.25), 0.0);
/// assert_eq!(step(0.5, 0.5), 1.0);
/// ```
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Hermite smoothstep between `edge0` and `edge1`.
///
/// `t = saturate((x - edge0) / (edge1 - edge0))`, result `t * t * (3 - 2t)`.
///
/// When `edge0 == edge1` the transition band has zero width and the function
/// degrades to [`step`]`(edge0, x)` instead of dividing by zero.
/// `edge1 < edge0` is allowed and yields an inverted transition.
///
/// # Example
///
/// ```rust
/// use magkey_math::smoothstep;
///
/// assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
/// assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
/// assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
///
/// // Degenerate band
/// assert_eq!(smoothstep(0.3, 0.3, 0.29), 0.0);
/// assert_eq!(smoothstep(0.3, 0.3, 0.3), 1.0);
/// ```
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = if edge0 == edge1 {
        step(edge0, x)
    } else {
        saturate(inverse_lerp(edge0, edge1, x))
    };
    t * t * (3.0 - 2.0 * t)
}
