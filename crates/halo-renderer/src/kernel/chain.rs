//! Full bloom chain on the CPU.

use crate::bloom::BloomSettings;
use crate::gpu::RendererError;

use super::blur::blur_separable;
use super::brightness::extract_image;
use super::composite::composite_image;
use super::image::HdrImage;

/// Run extract -> blur (H, V) x passes -> composite, in the same order the
/// GPU pipeline records its passes. A disabled effect returns the scene
/// unchanged.
pub fn run_bloom(scene: &HdrImage, settings: &BloomSettings) -> Result<HdrImage, RendererError> {
    if !settings.enabled {
        return Ok(scene.clone());
    }

    let bright = extract_image(scene, &settings.brightness);
    let blurred = blur_separable(&bright, &settings.blur);
    composite_image(scene, &blurred, &settings.composite)
}

// =============================================================================
// Tests
// =============================================================================
