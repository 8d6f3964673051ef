//! Behavioral properties of the magnify chroma-key kernel.

use approx::assert_abs_diff_eq;
use magkey_core::{Color3, Filter, Pixel, RgbaImage, SampledImage};
use magkey_ops::kernel::{self, blend_factor, chroma_distance, luma_chroma};
use magkey_ops::{parallel, KernelParameters, KeyColorDefault, ParameterHost, Variant};

const RED: Pixel = Pixel::new(1.0, 0.0, 0.0, 1.0);
const GREEN: Pixel = Pixel::new(0.0, 1.0, 0.0, 1.0);

fn assert_pixel_eq(a: Pixel, b: Pixel, eps: f32) {
    assert_abs_diff_eq!(a.r, b.r, epsilon = eps);
    assert_abs_diff_eq!(a.g, b.g, epsilon = eps);
    assert_abs_diff_eq!(a.b, b.b, epsilon = eps);
    assert_abs_diff_eq!(a.a, b.a, epsilon = eps);
}

/// Mixed scene: green block in the middle, warm gradient around it.
fn scene() -> RgbaImage {
    RgbaImage::from_fn(24, 24, |x, y| {
        if (8..16).contains(&x) && (8..16).contains(&y) {
            Pixel::new(0.05, 0.9, 0.1, 1.0)
        } else {
            Pixel::new(0.9, x as f32 / 24.0 * 0.5, y as f32 / 24.0 * 0.3, 0.8)
        }
    })
}

#[test]
fn color_transform_reference_values() {
    let red = luma_chroma(Color3::RED);
    assert_abs_diff_eq!(red.y, 0.2989, epsilon = 1e-4);
    assert_abs_diff_eq!(red.cr, 0.7132 * (1.0 - 0.2989), epsilon = 1e-4);
    assert_abs_diff_eq!(red.cb, 0.5647 * (0.0 - 0.2989), epsilon = 1e-4);

    let green = luma_chroma(Color3::GREEN);
    assert_abs_diff_eq!(green.y, 0.5866, epsilon = 1e-4);
    assert_abs_diff_eq!(green.cr, -0.7132 * 0.5866, epsilon = 1e-4);
    assert_abs_diff_eq!(green.cb, -0.5647 * 0.5866, epsilon = 1e-4);

    let blue = luma_chroma(Color3::BLUE);
    assert_abs_diff_eq!(blue.y, 0.1145, epsilon = 1e-4);
    assert_abs_diff_eq!(blue.cb, 0.5647 * (1.0 - 0.1145), epsilon = 1e-4);
}

#[test]
fn key_colored_source_contributes_nothing() {
    let far_mags = [
        Pixel::new(0.0, 0.0, 1.0, 1.0),
        Pixel::new(1.0, 0.0, 0.0, 0.5),
        Pixel::new(0.0, 1.0, 0.0, 1.0),
        Pixel::new(0.3, 0.9, 0.2, 1.0),
    ];
    for threshold in [0.01, 0.3, 0.9] {
        for variant in [Variant::Classic, Variant::Refactored] {
            let params = KernelParameters::new(Color3::GREEN)
                .with_threshold_sensitivity(threshold)
                .with_variant(variant);
            for mag in far_mags {
                let out = kernel::shade(GREEN, mag, &params);
                let d = chroma_distance(luma_chroma(mag.rgb()), luma_chroma(Color3::GREEN));
                let w = blend_factor(threshold, params.smoothing, d) * variant.blend_scale();
                assert_eq!(out, Pixel::ZERO.mix(mag, w));
            }
        }
    }
}

#[test]
fn key_colored_image_refactored_is_attenuated_magnified_color() {
    let img = RgbaImage::filled(8, 8, GREEN);
    let params = KernelParameters::with_key_default(KeyColorDefault::Documented)
        .with_variant(Variant::Refactored);
    let out = parallel::magnify_key(&img, &params).unwrap();
    for (_, _, px) in out.pixels() {
        assert_pixel_eq(px, GREEN.scale(0.7), 1e-5);
    }
}

#[test]
fn distant_key_passes_source_through() {
    let img = RgbaImage::filled(16, 16, RED);
    let params = KernelParameters::new(Color3::BLUE).with_threshold_sensitivity(0.05);
    for variant in [Variant::Classic, Variant::Refactored] {
        let out = parallel::magnify_key(&img, &params.with_variant(variant)).unwrap();
        for (_, _, px) in out.pixels() {
            assert_pixel_eq(px, RED, 1e-5);
        }
    }
}

#[test]
fn unit_magnification_is_identity_for_classic() {
    let img = scene();
    let sampler = img.sampler().with_filter(Filter::Nearest);
    for threshold in [0.0, 0.2, 0.3, 0.6] {
        for smoothing in [0.0, 0.1, 0.4] {
            let params = KernelParameters::new(Color3::GREEN)
                .with_magnification(1.0)
                .with_threshold_sensitivity(threshold)
                .with_smoothing(smoothing);
            let out = parallel::render(&sampler, 24, 24, &params).unwrap();
            for (x, y, px) in out.pixels() {
                assert_pixel_eq(px, img.pixel(x, y), 1e-6);
            }
        }
    }
}

#[test]
fn unit_magnification_is_identity_when_source_kept() {
    let img = scene();
    let params = KernelParameters::new(Color3::BLUE)
        .with_magnification(1.0)
        .with_threshold_sensitivity(0.05)
        .with_variant(Variant::Refactored);
    let out = parallel::render(&img.sampler().with_filter(Filter::Nearest), 24, 24, &params).unwrap();
    for (x, y, px) in out.pixels() {
        assert_pixel_eq(px, img.pixel(x, y), 1e-6);
    }
}

#[test]
fn refactored_deviation_is_seven_tenths_of_classic() {
    // Red on the right edge, key-ish colors elsewhere. With magnification 0.3
    // the right edge samples the interior.
    let src = |u: f32, v: f32| {
        if u > 0.8 {
            RED
        } else {
            Pixel::new(v * 0.4, 1.0 - v * 0.3, v * 0.2, 1.0)
        }
    };
    let classic = KernelParameters::new(Color3::GREEN).with_smoothing(0.3);
    let refactored = classic.with_variant(Variant::Refactored);

    let mut blended = 0;
    for i in 0..10 {
        for j in 0..10 {
            let u = 0.81 + i as f32 * 0.018;
            let v = j as f32 / 9.0;
            let tex = src.sample(u, v);
            let c = kernel::evaluate(&src, u, v, &classic);
            let r = kernel::evaluate(&src, u, v, &refactored);
            if c != tex {
                blended += 1;
            }
            assert_abs_diff_eq!(r.r - tex.r, 0.7 * (c.r - tex.r), epsilon = 1e-5);
            assert_abs_diff_eq!(r.g - tex.g, 0.7 * (c.g - tex.g), epsilon = 1e-5);
            assert_abs_diff_eq!(r.b - tex.b, 0.7 * (c.b - tex.b), epsilon = 1e-5);
            assert_abs_diff_eq!(r.a - tex.a, 0.7 * (c.a - tex.a), epsilon = 1e-5);
        }
    }
    assert!(blended > 50, "only {blended} samples exercised the blend");
}

#[test]
fn blend_boundaries_and_monotonicity() {
    for (threshold, smoothing) in [(0.3, 0.1), (0.05, 0.5), (0.7, 0.02)] {
        assert_eq!(blend_factor(threshold, smoothing, threshold), 1.0);
        assert_eq!(blend_factor(threshold, smoothing, threshold + smoothing), 0.0);

        let mut prev = 1.0;
        for k in 0..=200 {
            let d = threshold - smoothing + k as f32 * (3.0 * smoothing / 200.0);
            let b = blend_factor(threshold, smoothing, d);
            assert!(b <= prev + 1e-6, "blend rose at d={d}");
            assert!((-1e-6..=1.0 + 1e-6).contains(&b));
            prev = b;
        }
    }
}

#[test]
fn zero_smoothing_is_hard_step() {
    let threshold = 0.3;
    assert_eq!(blend_factor(threshold, 0.0, 0.0), 1.0);
    assert_eq!(blend_factor(threshold, 0.0, 0.2999), 1.0);
    assert_eq!(blend_factor(threshold, 0.0, threshold), 0.0);
    assert_eq!(blend_factor(threshold, 0.0, 0.9), 0.0);

    let params = KernelParameters::new(Color3::GREEN).with_smoothing(0.0);
    let out = parallel::magnify_key(&scene(), &params).unwrap();
    assert!(out.data().iter().all(|c| c.is_finite()));
}

#[test]
fn negative_smoothing_is_defined() {
    let params = KernelParameters::new(Color3::GREEN).with_smoothing(-0.2);
    let out = parallel::magnify_key(&scene(), &params).unwrap();
    assert!(out.data().iter().all(|c| c.is_finite()));
}

#[test]
fn host_render_snapshots_parameters() {
    let img = scene();
    let mut host = ParameterHost::new(Color3::GREEN);
    host.set_variant(Variant::Refactored);
    let before = host.render(&img, 24, 24).unwrap();
    let expected = parallel::magnify_key(&img, &host.snapshot()).unwrap();
    assert_eq!(before.data(), expected.data());

    host.set_magnification(1.0);
    let after = host.render(&img, 24, 24).unwrap();
    assert_ne!(before.data(), after.data());
}
