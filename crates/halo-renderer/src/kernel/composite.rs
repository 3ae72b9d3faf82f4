//! Composite of the blurred bright pass onto the scene.

use halo_config::schema::{CompositeConfig, CompositeMode};

use crate::gpu::RendererError;

use super::color::{add, luminance, mix, scale, smoothstep, Rgba};
use super::image::HdrImage;

/// Maps scene luminance to a bloom multiplier: `min` at or below `low`,
/// `max` at or above `high`, smoothstep in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveCurve {
    pub min: f32,
    pub max: f32,
    pub low: f32,
    pub high: f32,
}

impl Default for AdaptiveCurve {
    fn default() -> Self {
        Self {
            min: 0.2,
            max: 1.5,
            low: 0.5,
            high: 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeParams {
    pub mode: CompositeMode,
    pub intensity: f32,
    pub curve: AdaptiveCurve,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self::from(&CompositeConfig::default())
    }
}

impl From<&CompositeConfig> for CompositeParams {
    fn from(config: &CompositeConfig) -> Self {
        Self {
            mode: config.mode,
            intensity: config.intensity,
            curve: AdaptiveCurve {
                min: config.adaptive_min,
                max: config.adaptive_max,
                low: config.adaptive_low,
                high: config.adaptive_high,
            },
        }
    }
}

pub fn adaptive_intensity(scene_luminance: f32, curve: &AdaptiveCurve) -> f32 {
    mix(
        curve.min,
        curve.max,
        smoothstep(curve.low, curve.high, scene_luminance),
    )
}

/// Blend one bloom texel onto one scene texel. The result is not clamped.
pub fn composite(scene: Rgba, bloom: Rgba, params: &CompositeParams) -> Rgba {
    let factor = match params.mode {
        CompositeMode::Simple => params.intensity,
        CompositeMode::Adaptive => {
            params.intensity * adaptive_intensity(luminance(scene), &params.curve)
        }
    };
    add(scene, scale(bloom, factor))
}

pub fn composite_image(
    scene: &HdrImage,
    bloom: &HdrImage,
    params: &CompositeParams,
) -> Result<HdrImage, RendererError> {
    if scene.width() != bloom.width() || scene.height() != bloom.height() {
        return Err(RendererError::InvalidImage(format!(
            "scene is {}x{} but bloom is {}x{}",
            scene.width(),
            scene.height(),
            bloom.width(),
            bloom.height()
        )));
    }

    let pixels = scene
        .pixels()
        .iter()
        .zip(bloom.pixels())
        .map(|(&s, &b)| composite(s, b, params))
        .collect();
    HdrImage::from_pixels(scene.width(), scene.height(), pixels)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn simple(intensity: f32) -> CompositeParams {
        CompositeParams {
            mode: CompositeMode::Simple,
            intensity,
            curve: AdaptiveCurve::default(),
        }
    }

    #[test]
    fn simple_is_additive_and_unclamped() {
        let out = composite([0.5, 0.5, 0.5, 1.0], [0.2, 0.2, 0.2, 1.0], &simple(2.0));
        for ch in 0..3 {
            assert!((out[ch] - 0.9).abs() < 1e-6);
        }
        assert_eq!(out[3], 3.0);
    }

    #[test]
    fn simple_zero_intensity_passes_scene_through() {
        let scene = [0.1, 0.2, 0.3, 1.0];
        assert_eq!(composite(scene, [5.0; 4], &simple(0.0)), scene);
    }

    #[test]
    fn adaptive_floor_below_low_edge() {
        let curve = AdaptiveCurve::default();
        assert_eq!(adaptive_intensity(0.3, &curve), 0.2);
    }

    #[test]
    fn adaptive_ceiling_above_high_edge() {
        let curve = AdaptiveCurve::default();
        assert_eq!(adaptive_intensity(0.95, &curve), 1.5);
    }

    #[test]
    fn adaptive_midpoint() {
        let curve = AdaptiveCurve::default();
        let mid = adaptive_intensity(0.7, &curve);
        assert!((mid - 0.85).abs() < 1e-5);
    }

    #[test]
    fn adaptive_uses_scene_luminance_not_bloom() {
        let params = CompositeParams {
            mode: CompositeMode::Adaptive,
            intensity: 1.0,
            curve: AdaptiveCurve::default(),
        };
        // dark scene, very bright bloom: still the 0.2 floor
        let out = composite([0.0, 0.0, 0.0, 1.0], [10.0, 10.0, 10.0, 0.0], &params);
        assert!((out[0] - 2.0).abs() < 1e-5);
    }

    #[test]
    fn adaptive_with_flat_curve_matches_simple() {
        let flat = CompositeParams {
            mode: CompositeMode::Adaptive,
            intensity: 0.8,
            curve: AdaptiveCurve {
                min: 1.0,
                max: 1.0,
                ..AdaptiveCurve::default()
            },
        };
        let scene = [0.6, 0.7, 0.8, 1.0];
        let bloom = [0.3, 0.2, 0.1, 1.0];
        let a = composite(scene, bloom, &flat);
        let b = composite(scene, bloom, &simple(0.8));
        for ch in 0..4 {
            assert!((a[ch] - b[ch]).abs() < 1e-6);
        }
    }

    #[test]
    fn composite_image_rejects_size_mismatch() {
        let scene = HdrImage::new(4, 4);
        let bloom = HdrImage::new(2, 4);
        let err = composite_image(&scene, &bloom, &simple(1.0)).unwrap_err();
        assert!(err.to_string().contains("4x4"));
    }
}
