//! Render target configuration types.

use serde::{Deserialize, Serialize};

/// Texture format of the final composite target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OutputFormat {
    /// 8-bit target; composite output is clamped on store.
    #[default]
    Rgba8Unorm,
    /// Half-float target; composite output stays unclamped.
    Rgba16Float,
}

/// Render target dimensions and format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Target width in pixels (valid range: 1-8192).
    pub width: u32,
    /// Target height in pixels (valid range: 1-8192).
    pub height: u32,
    pub output_format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            output_format: OutputFormat::Rgba8Unorm,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
