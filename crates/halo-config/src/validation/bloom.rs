//! Bloom configuration validation.

use crate::schema::HaloConfig;

use super::helpers::{validate_range, validate_range_f32};

pub(crate) fn validate_brightness(errors: &mut Vec<String>, config: &HaloConfig) {
    let brightness = &config.bloom.brightness;
    validate_range_f32(
        errors,
        "bloom.brightness.threshold",
        brightness.threshold,
        0.0,
        4.0,
    );
    validate_range_f32(errors, "bloom.brightness.knee", brightness.knee, 0.001, 1.0);
}

pub(crate) fn validate_blur(errors: &mut Vec<String>, config: &HaloConfig) {
    validate_range_f32(
        errors,
        "bloom.blur.radius",
        config.bloom.blur.radius,
        1.0,
        32.0,
    );
    validate_range(errors, "bloom.blur.passes", config.bloom.blur.passes, 1, 5);
}

pub(crate) fn validate_composite(errors: &mut Vec<String>, config: &HaloConfig) {
    let composite = &config.bloom.composite;
    validate_range_f32(
        errors,
        "bloom.composite.intensity",
        composite.intensity,
        0.0,
        8.0,
    );
    validate_range_f32(
        errors,
        "bloom.composite.adaptive_min",
        composite.adaptive_min,
        0.0,
        8.0,
    );
    validate_range_f32(
        errors,
        "bloom.composite.adaptive_max",
        composite.adaptive_max,
        0.0,
        8.0,
    );
    validate_range_f32(
        errors,
        "bloom.composite.adaptive_low",
        composite.adaptive_low,
        0.0,
        4.0,
    );
    validate_range_f32(
        errors,
        "bloom.composite.adaptive_high",
        composite.adaptive_high,
        0.0,
        4.0,
    );

    // smoothstep is undefined when its edges meet or cross
    if composite.adaptive_low >= composite.adaptive_high {
        errors.push(format!(
            "bloom.composite.adaptive_low ({}) must be below adaptive_high ({})",
            composite.adaptive_low, composite.adaptive_high
        ));
    }
}
