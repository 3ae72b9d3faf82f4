//! Brightness extraction.

use halo_config::schema::{BrightnessConfig, BrightnessMode};

use super::color::{luminance, smoothstep, Rgba};
use super::image::HdrImage;

/// Extraction parameters for one draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessParams {
    pub mode: BrightnessMode,
    pub threshold: f32,
    /// Half-width of the soft transition. Ignored in hard mode.
    pub knee: f32,
}

impl Default for BrightnessParams {
    fn default() -> Self {
        Self::from(&BrightnessConfig::default())
    }
}

impl From<&BrightnessConfig> for BrightnessParams {
    fn from(config: &BrightnessConfig) -> Self {
        Self {
            mode: config.mode,
            threshold: config.threshold,
            knee: config.knee,
        }
    }
}

/// Soft-knee weight: smoothstep over `[threshold - knee, threshold + knee]`,
/// squared to favour the brightest pixels.
pub fn soft_knee_weight(lum: f32, threshold: f32, knee: f32) -> f32 {
    let t = smoothstep(threshold - knee, threshold + knee, lum);
    t * t
}

/// Isolate the part of `color` that should bloom.
///
/// Hard mode returns `color` untouched when its luminance is strictly above
/// the threshold and transparent black otherwise. Soft mode scales RGB by
/// [`soft_knee_weight`] and keeps alpha.
pub fn extract_brightness(color: Rgba, params: &BrightnessParams) -> Rgba {
    let lum = luminance(color);
    match params.mode {
        BrightnessMode::Hard => {
            if lum > params.threshold {
                color
            } else {
                [0.0; 4]
            }
        }
        BrightnessMode::Soft => {
            let w = soft_knee_weight(lum, params.threshold, params.knee);
            [color[0] * w, color[1] * w, color[2] * w, color[3]]
        }
    }
}

pub fn extract_image(image: &HdrImage, params: &BrightnessParams) -> HdrImage {
    image.map(|c| extract_brightness(c, params))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hard(threshold: f32) -> BrightnessParams {
        BrightnessParams {
            mode: BrightnessMode::Hard,
            threshold,
            knee: 0.1,
        }
    }

    fn soft(threshold: f32, knee: f32) -> BrightnessParams {
        BrightnessParams {
            mode: BrightnessMode::Soft,
            threshold,
            knee,
        }
    }

    #[test]
    fn hard_passes_bright_color_unchanged() {
        let color = [0.9, 0.9, 0.9, 0.7];
        assert_eq!(extract_brightness(color, &hard(0.5)), color);
    }

    #[test]
    fn hard_drops_dark_color_to_transparent() {
        let out = extract_brightness([0.2, 0.2, 0.2, 1.0], &hard(0.5));
        assert_eq!(out, [0.0; 4]);
    }

    #[test]
    fn hard_luminance_equal_to_threshold_is_dropped() {
        let color = [0.5, 0.5, 0.5, 1.0];
        let threshold = luminance(color);
        assert!((threshold - 0.5).abs() < 1e-6);
        let out = extract_brightness(color, &hard(threshold));
        assert_eq!(out[3], 0.0);
        assert_eq!(out, [0.0; 4]);
    }

    #[test]
    fn hard_threshold_at_or_below_zero_passes_nearly_everything() {
        let out = extract_brightness([0.01, 0.0, 0.0, 1.0], &hard(0.0));
        assert_eq!(out, [0.01, 0.0, 0.0, 1.0]);
        // black still has luminance 0, which is not strictly above 0
        assert_eq!(extract_brightness([0.0, 0.0, 0.0, 1.0], &hard(0.0)), [0.0; 4]);
    }

    #[test]
    fn hard_threshold_at_one_drops_near_white() {
        let out = extract_brightness([0.99, 0.99, 0.99, 1.0], &hard(1.0));
        assert_eq!(out[3], 0.0);
    }

    #[test]
    fn soft_weight_at_threshold_is_quarter() {
        let w = soft_knee_weight(0.5, 0.5, 0.1);
        assert!((w - 0.25).abs() < 1e-5);
        // edges that are exact in binary give the exact midpoint
        assert_eq!(soft_knee_weight(0.5, 0.5, 0.25), 0.25);
    }

    #[test]
    fn soft_preserves_alpha() {
        let out = extract_brightness([0.1, 0.1, 0.1, 0.6], &soft(0.9, 0.1));
        assert_eq!(out, [0.0, 0.0, 0.0, 0.6]);
    }

    #[test]
    fn soft_scales_rgb_by_squared_factor() {
        let color = [0.5, 0.5, 0.5, 1.0];
        let lum = luminance(color);
        let params = soft(lum, 0.25);
        let out = extract_brightness(color, &params);
        let expected = 0.5 * soft_knee_weight(lum, lum, 0.25);
        assert!((out[0] - expected).abs() < 1e-6);
        assert!((out[0] - 0.125).abs() < 1e-5);
        assert_eq!(out[3], 1.0);
    }

    #[test]
    fn soft_fully_passes_above_knee() {
        let color = [2.0, 2.0, 2.0, 1.0];
        assert_eq!(extract_brightness(color, &soft(0.7, 0.1)), color);
    }

    #[test]
    fn soft_threshold_one_attenuates_white_heavily() {
        let out = extract_brightness([1.0, 1.0, 1.0, 1.0], &soft(1.0, 0.1));
        assert!(out[0] <= 0.25 + 1e-5);
    }

    #[test]
    fn default_params_follow_config() {
        let p = BrightnessParams::default();
        assert_eq!(p.mode, BrightnessMode::Soft);
        assert!((p.threshold - 0.7).abs() < f32::EPSILON);
        assert!((p.knee - 0.1).abs() < f32::EPSILON);
    }
}
