//! Bloom effect configuration types.
//!
//! Each stage of the effect (brightness extraction, separable blur,
//! composite) has its own table. The two behavioural variants of the
//! extraction and composite stages are selected by a tagged mode enum
//! rather than by separate shader programs.

use serde::{Deserialize, Serialize};

/// How bright pixels are isolated from the scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum BrightnessMode {
    /// Pass the color through when luminance > threshold, else transparent black.
    Hard,
    /// Smoothstep over `[threshold - knee, threshold + knee]`, squared.
    #[default]
    Soft,
}

/// How the blurred bright pass is blended back onto the scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum CompositeMode {
    /// `scene + bloom * intensity`.
    Simple,
    /// Intensity further scaled by the scene's own luminance.
    #[default]
    Adaptive,
}

/// Brightness extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessConfig {
    pub mode: BrightnessMode,
    /// Luminance cutoff (valid range: 0.0-4.0).
    pub threshold: f32,
    /// Half-width of the soft transition (valid range: 0.001-1.0).
    pub knee: f32,
}

impl Default for BrightnessConfig {
    fn default() -> Self {
        Self {
            mode: BrightnessMode::Soft,
            threshold: 0.7,
            knee: 0.1,
        }
    }
}

/// Separable Gaussian blur settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    /// Kernel radius in texels (valid range: 1.0-32.0). Sigma is radius / 2.
    pub radius: f32,
    /// Number of horizontal+vertical iterations (valid range: 1-5).
    pub passes: u32,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            radius: 8.0,
            passes: 1,
        }
    }
}

impl BlurConfig {
    pub fn sigma(&self) -> f32 {
        self.radius / 2.0
    }
}

/// Composite settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    pub mode: CompositeMode,
    /// Bloom multiplier (valid range: 0.0-8.0).
    pub intensity: f32,
    /// Adaptive multiplier applied to dark scene regions.
    pub adaptive_min: f32,
    /// Adaptive multiplier applied to bright scene regions.
    pub adaptive_max: f32,
    /// Scene luminance where the adaptive ramp starts.
    pub adaptive_low: f32,
    /// Scene luminance where the adaptive ramp saturates.
    pub adaptive_high: f32,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            mode: CompositeMode::Adaptive,
            intensity: 0.8,
            adaptive_min: 0.2,
            adaptive_max: 1.5,
            adaptive_low: 0.5,
            adaptive_high: 0.9,
        }
    }
}

/// Master bloom configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Master toggle; the scene passes through untouched when false.
    pub enabled: bool,
    pub brightness: BrightnessConfig,
    pub blur: BlurConfig,
    pub composite: CompositeConfig,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            brightness: BrightnessConfig::default(),
            blur: BlurConfig::default(),
            composite: CompositeConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bloom_config_defaults() {
        let config = BloomConfig::default();
        assert!(config.enabled);
        assert_eq!(config.brightness.mode, BrightnessMode::Soft);
        assert!((config.brightness.threshold - 0.7).abs() < f32::EPSILON);
        assert!((config.brightness.knee - 0.1).abs() < f32::EPSILON);
        assert!((config.blur.radius - 8.0).abs() < f32::EPSILON);
        assert!((config.blur.sigma() - 4.0).abs() < f32::EPSILON);
        assert_eq!(config.blur.passes, 1);
        assert_eq!(config.composite.mode, CompositeMode::Adaptive);
        assert!((config.composite.intensity - 0.8).abs() < f32::EPSILON);
        assert!((config.composite.adaptive_min - 0.2).abs() < f32::EPSILON);
        assert!((config.composite.adaptive_max - 1.5).abs() < f32::EPSILON);
        assert!((config.composite.adaptive_low - 0.5).abs() < f32::EPSILON);
        assert!((config.composite.adaptive_high - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn brightness_mode_parses_lowercase() {
        let config: BrightnessConfig = toml::from_str(r#"mode = "hard""#).unwrap();
        assert_eq!(config.mode, BrightnessMode::Hard);
        // defaults preserved
        assert!((config.threshold - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_brightness_mode_is_rejected() {
        let result: Result<BrightnessConfig, _> = toml::from_str(r#"mode = "bilateral""#);
        assert!(result.is_err());
    }

    #[test]
    fn composite_partial_toml() {
        let toml_str = r#"
mode = "simple"
intensity = 2.0
"#;
        let config: CompositeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.mode, CompositeMode::Simple);
        assert!((config.intensity - 2.0).abs() < f32::EPSILON);
        assert!((config.adaptive_max - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn bloom_full_toml() {
        let toml_str = r#"
enabled = false

[brightness]
mode = "hard"
threshold = 0.5

[blur]
radius = 4.0
passes = 3

[composite]
mode = "simple"
"#;
        let config: BloomConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.brightness.mode, BrightnessMode::Hard);
        assert!((config.brightness.threshold - 0.5).abs() < f32::EPSILON);
        assert!((config.blur.sigma() - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.blur.passes, 3);
        assert_eq!(config.composite.mode, CompositeMode::Simple);
    }
}
