//! WGSL source and uniform layout for running the kernel on a GPU.
//!
//! Only the shader text and the host-side data layout live here; device,
//! queue and pipeline creation belong to the embedding renderer.
//!
//! Bindings of [`MAGKEY_WGSL`]:
//!
//! | Binding | Type                          | Content |
//! |---------|-------------------------------|---------|
//! | 0       | `storage, read` `array<f32>`  | source RGBA, row-major |
//! | 1       | `storage, read_write`         | destination RGBA |
//! | 2       | `uniform` `vec4<u32>`         | [`dims`]: src w, src h, dst w, dst h |
//! | 3       | `uniform` `MagKeyParams`      | [`MagKeyUniforms`] |
//!
//! Sampling is bilinear with clamp-to-edge addressing, matching the default
//! CPU [`Sampler`](magkey_core::Sampler).
//!
//! Dispatch is 2D with one invocation per destination pixel and
//! [`WORKGROUP_DIM`] squared invocations per workgroup. [`workgroup_count`]
//! gives the dispatch size.

use crate::KernelParameters;
use bytemuck::{Pod, Zeroable};

/// Workgroup edge length declared by [`MAGKEY_WGSL`] (16 x 16 invocations).
pub const WORKGROUP_DIM: u32 = 16;

/// Magnify chroma-key compute kernel.
pub const MAGKEY_WGSL: &str = r#"
struct MagKeyParams {
    color_to_replace: vec3<f32>,
    threshold_sensitivity: f32,
    smoothing: f32,
    magnification: f32,
    blend_scale: f32,
    _pad: f32,
}

@group(0) @binding(0) var<storage, read> src: array<f32>;
@group(0) @binding(1) var<storage, read_write> dst: array<f32>;
@group(0) @binding(2) var<uniform> dims: vec4<u32>;  // src_w, src_h, dst_w, dst_h
@group(0) @binding(3) var<uniform> params: MagKeyParams;

fn texel(x: i32, y: i32) -> vec4<f32> {
    let cx = u32(clamp(x, 0, i32(dims.x) - 1));
    let cy = u32(clamp(y, 0, i32(dims.y) - 1));
    let base = (cy * dims.x + cx) * 4u;
    return vec4<f32>(src[base], src[base + 1u], src[base + 2u], src[base + 3u]);
}

fn sample_bilinear(uv: vec2<f32>) -> vec4<f32> {
    let f = uv * vec2<f32>(f32(dims.x), f32(dims.y)) - vec2<f32>(0.5);
    let f0 = floor(f);
    let t = f - f0;
    let x0 = i32(f0.x);
    let y0 = i32(f0.y);
    let top = mix(texel(x0, y0), texel(x0 + 1, y0), t.x);
    let bot = mix(texel(x0, y0 + 1), texel(x0 + 1, y0 + 1), t.x);
    return mix(top, bot, t.y);
}

// (Y, Cr, Cb)
fn luma_chroma(c: vec3<f32>) -> vec3<f32> {
    let y = 0.2989 * c.r + 0.5866 * c.g + 0.1145 * c.b;
    return vec3<f32>(y, 0.7132 * (c.r - y), 0.5647 * (c.b - y));
}

// Zero-width band degrades to a hard step.
fn smoothstep_band(e0: f32, e1: f32, x: f32) -> f32 {
    var t = step(e0, x);
    if e0 != e1 {
        t = clamp((x - e0) / (e1 - e0), 0.0, 1.0);
    }
    return t * t * (3.0 - 2.0 * t);
}

@compute @workgroup_size(16, 16)
fn main(@builtin(global_invocation_id) id: vec3<u32>) {
    let x = id.x;
    let y = id.y;
    if x >= dims.z || y >= dims.w { return; }

    let px = y * dims.z + x;
    let uv = (vec2<f32>(f32(x), f32(y)) + vec2<f32>(0.5)) / vec2<f32>(f32(dims.z), f32(dims.w));

    var texture_color = sample_bilinear(uv);
    let mag_uv = vec2<f32>(0.5) + (uv - vec2<f32>(0.5)) * params.magnification;
    let mag_color = sample_bilinear(mag_uv);

    let mask = luma_chroma(params.color_to_replace);
    let mag = luma_chroma(mag_color.rgb);
    let tex = luma_chroma(texture_color.rgb);

    let src_distance = distance(tex.yz, mask.yz);
    texture_color = texture_color * step(params.threshold_sensitivity, src_distance);

    let mag_distance = distance(mag.yz, mask.yz);
    let edge1 = params.threshold_sensitivity + params.smoothing;
    let blend = 1.0 - smoothstep_band(params.threshold_sensitivity, edge1, mag_distance);

    let result = mix(texture_color, mag_color, blend * params.blend_scale);
    let base = px * 4u;
    dst[base] = result.x;
    dst[base + 1u] = result.y;
    dst[base + 2u] = result.z;
    dst[base + 3u] = result.w;
}
"#;

/// Uniform block matching `MagKeyParams` in [`MAGKEY_WGSL`].
///
/// 32 bytes. `vec3<f32>` has 16-byte alignment in WGSL, so the threshold
/// packs into its fourth lane.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MagKeyUniforms {
    /// Key color.
    pub color_to_replace: [f32; 3],
    /// Threshold sensitivity.
    pub threshold_sensitivity: f32,
    /// Smoothing band width.
    pub smoothing: f32,
    /// Magnification factor.
    pub magnification: f32,
    /// [`Variant::blend_scale`](crate::Variant::blend_scale).
    pub blend_scale: f32,
    /// Padding to 16-byte struct size.
    pub _pad: f32,
}

impl MagKeyUniforms {
    /// Raw bytes for a uniform buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<&KernelParameters> for MagKeyUniforms {
    fn from(p: &KernelParameters) -> Self {
        Self {
            color_to_replace: p.color_to_replace.to_array(),
            threshold_sensitivity: p.threshold_sensitivity,
            smoothing: p.smoothing,
            magnification: p.magnification,
            blend_scale: p.variant.blend_scale(),
            _pad: 0.0,
        }
    }
}

/// The `dims` uniform: source and destination sizes.
pub fn dims(src_width: u32, src_height: u32, dst_width: u32, dst_height: u32) -> [u32; 4] {
    [src_width, src_height, dst_width, dst_height]
}

/// Workgroups `(x, y)` needed to cover a `width x height` destination.
pub fn workgroup_count(width: u32, height: u32) -> (u32, u32) {
    (width.div_ceil(WORKGROUP_DIM), height.div_ceil(WORKGROUP_DIM))
}
