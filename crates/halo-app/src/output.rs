//! PNG output.

use std::path::Path;

use halo_common::HaloError;
use halo_renderer::kernel::{HdrImage, Rgba};

/// Quantize a linear color to 8 bits per channel. Values are clamped to
/// [0, 1]; no tone mapping is applied.
pub fn to_rgba8(color: Rgba) -> [u8; 4] {
    color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Write `image` to `path` as an 8-bit RGBA PNG.
pub fn write_png(image: &HdrImage, path: &Path) -> Result<(), HaloError> {
    let buffer = image::RgbaImage::from_fn(image.width(), image.height(), |x, y| {
        image::Rgba(to_rgba8(image.get(x, y)))
    });

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    buffer
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| HaloError::Image(format!("failed to write {}: {e}", path.display())))?;

    tracing::info!(
        "wrote {}x{} PNG to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_clamps_hdr_and_negative() {
        assert_eq!(to_rgba8([2.5, -1.0, 0.5, 1.0]), [255, 0, 128, 255]);
    }

    #[test]
    fn write_png_round_trips_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.png");
        let mut image = HdrImage::new(4, 3);
        image.set(1, 2, [3.0, 0.0, 1.0, 1.0]);

        write_png(&image, &path).unwrap();

        let read = image::open(&path).unwrap().to_rgba8();
        assert_eq!(read.dimensions(), (4, 3));
        assert_eq!(read.get_pixel(1, 2).0, [255, 0, 255, 255]);
        assert_eq!(read.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }
}
