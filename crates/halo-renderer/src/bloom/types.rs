//! Bloom pipeline types.

use halo_config::schema::{BrightnessMode, CompositeMode, HaloConfig, OutputFormat};

use crate::kernel::{BlurParams, BrightnessParams, CompositeParams};

pub const BRIGHTNESS_MODE_HARD: u32 = 0;
pub const BRIGHTNESS_MODE_SOFT: u32 = 1;
pub const COMPOSITE_MODE_SIMPLE: u32 = 0;
pub const COMPOSITE_MODE_ADAPTIVE: u32 = 1;

pub const MAX_BLUR_PASSES: u32 = 5;
pub const MAX_BLUR_RADIUS: f32 = 32.0;

/// Value of the `mode` field in the brightness uniform block.
pub fn brightness_mode_index(mode: BrightnessMode) -> u32 {
    match mode {
        BrightnessMode::Hard => BRIGHTNESS_MODE_HARD,
        BrightnessMode::Soft => BRIGHTNESS_MODE_SOFT,
    }
}

/// Value of the `mode` field in the composite uniform block.
pub fn composite_mode_index(mode: CompositeMode) -> u32 {
    match mode {
        CompositeMode::Simple => COMPOSITE_MODE_SIMPLE,
        CompositeMode::Adaptive => COMPOSITE_MODE_ADAPTIVE,
    }
}

/// Texture format for the configured composite target.
pub fn output_texture_format(format: OutputFormat) -> wgpu::TextureFormat {
    match format {
        OutputFormat::Rgba8Unorm => wgpu::TextureFormat::Rgba8Unorm,
        OutputFormat::Rgba16Float => wgpu::TextureFormat::Rgba16Float,
    }
}

/// Uniforms for the brightness extraction shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BrightnessUniforms {
    pub threshold: f32,
    pub knee: f32,
    pub mode: u32,
    pub _padding: u32,
}

impl BrightnessUniforms {
    pub fn new(params: &BrightnessParams) -> Self {
        Self {
            threshold: params.threshold,
            knee: params.knee,
            mode: brightness_mode_index(params.mode),
            _padding: 0,
        }
    }
}

/// Uniforms for one direction of the blur shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlurUniforms {
    /// (1,0) for horizontal, (0,1) for vertical.
    pub direction: [f32; 2],
    pub radius: f32,
    pub sigma: f32,
}

impl BlurUniforms {
    pub fn new(params: &BlurParams, direction: [f32; 2]) -> Self {
        Self {
            direction,
            radius: params.radius,
            sigma: params.sigma,
        }
    }
}

/// Uniforms for the composite shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CompositeUniforms {
    pub intensity: f32,
    pub mode: u32,
    pub adaptive_min: f32,
    pub adaptive_max: f32,
    pub adaptive_low: f32,
    pub adaptive_high: f32,
    pub _padding: [f32; 2],
}

impl CompositeUniforms {
    /// A disabled effect composites with zero intensity so the scene passes
    /// through unchanged.
    pub fn new(params: &CompositeParams, enabled: bool) -> Self {
        Self {
            intensity: if enabled { params.intensity } else { 0.0 },
            mode: composite_mode_index(params.mode),
            adaptive_min: params.curve.min,
            adaptive_max: params.curve.max,
            adaptive_low: params.curve.low,
            adaptive_high: params.curve.high,
            _padding: [0.0; 2],
        }
    }
}

/// Bloom configuration derived from app config at pipeline creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomSettings {
    pub enabled: bool,
    pub brightness: BrightnessParams,
    pub blur: BlurParams,
    pub composite: CompositeParams,
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self::from_config(&HaloConfig::default())
    }
}

impl BloomSettings {
    /// Create bloom settings from the application config.
    pub fn from_config(config: &HaloConfig) -> Self {
        let bloom = &config.bloom;
        let mut blur = BlurParams::from(&bloom.blur);
        blur.passes = blur.passes.clamp(1, MAX_BLUR_PASSES);
        blur.radius = blur.radius.clamp(1.0, MAX_BLUR_RADIUS);
        Self {
            enabled: bloom.enabled,
            brightness: BrightnessParams::from(&bloom.brightness),
            blur,
            composite: CompositeParams::from(&bloom.composite),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
