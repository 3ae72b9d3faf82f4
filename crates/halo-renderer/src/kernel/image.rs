//! Floating-point RGBA image used as kernel input and output.

use crate::gpu::RendererError;

use super::color::Rgba;

/// A linear, unclamped RGBA image stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct HdrImage {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl HdrImage {
    /// A transparent-black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0.0; 4])
    }

    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, RendererError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(RendererError::InvalidImage(format!(
                "{width}x{height} image needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Rgba {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// Fetch a texel with clamp-to-edge addressing.
    pub fn texel_clamped(&self, x: i64, y: i64) -> Rgba {
        let x = x.clamp(0, self.width as i64 - 1) as u32;
        let y = y.clamp(0, self.height as i64 - 1) as u32;
        self.get(x, y)
    }

    /// Bilinear sample at a position in texel units (texel `i` has its
    /// center at `i`), clamp-to-edge. Matches a linear sampler with
    /// `ClampToEdge` addressing.
    pub fn sample_bilinear(&self, x: f32, y: f32) -> Rgba {
        let x0 = x.floor();
        let y0 = y.floor();
        let fx = x - x0;
        let fy = y - y0;
        let (ix, iy) = (x0 as i64, y0 as i64);

        // Exact texel hit; skip the blend so neighbours never leak in.
        if fx == 0.0 && fy == 0.0 {
            return self.texel_clamped(ix, iy);
        }

        let a = self.texel_clamped(ix, iy);
        let b = self.texel_clamped(ix + 1, iy);
        let c = self.texel_clamped(ix, iy + 1);
        let d = self.texel_clamped(ix + 1, iy + 1);

        let mut out = [0.0; 4];
        for ch in 0..4 {
            let top = a[ch] * (1.0 - fx) + b[ch] * fx;
            let bottom = c[ch] * (1.0 - fx) + d[ch] * fx;
            out[ch] = top * (1.0 - fy) + bottom * fy;
        }
        out
    }

    /// Apply `f` to every pixel.
    pub fn map(&self, f: impl Fn(Rgba) -> Rgba) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Largest per-channel absolute difference between two images of equal size.
    pub fn max_abs_diff(&self, other: &HdrImage) -> Option<f32> {
        if self.width != other.width || self.height != other.height {
            return None;
        }
        let diff = self
            .pixels
            .iter()
            .zip(&other.pixels)
            .flat_map(|(a, b)| (0..4).map(move |ch| (a[ch] - b[ch]).abs()))
            .fold(0.0f32, f32::max);
        Some(diff)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

// =============================================================================
// Tests
// =============================================================================
