//! Separable Gaussian blur.

use halo_config::schema::BlurConfig;

use super::color::{add, scale, Rgba};
use super::image::HdrImage;

pub const HORIZONTAL: [f32; 2] = [1.0, 0.0];
pub const VERTICAL: [f32; 2] = [0.0, 1.0];

/// Blur parameters for one bloom frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurParams {
    /// Kernel half-width in texels; truncated to an integer tap count.
    pub radius: f32,
    pub sigma: f32,
    /// Horizontal+vertical iterations.
    pub passes: u32,
}

impl Default for BlurParams {
    fn default() -> Self {
        Self::from(&BlurConfig::default())
    }
}

impl From<&BlurConfig> for BlurParams {
    fn from(config: &BlurConfig) -> Self {
        Self {
            radius: config.radius,
            sigma: config.sigma(),
            passes: config.passes,
        }
    }
}

impl BlurParams {
    /// Number of taps on each side of the center.
    pub fn half_taps(&self) -> i32 {
        self.radius as i32
    }
}

/// Unnormalized Gaussian weight `exp(-offset^2 / (2 sigma^2))`.
pub fn gaussian_weight(offset: f32, sigma: f32) -> f32 {
    (-(offset * offset) / (2.0 * sigma * sigma)).exp()
}

/// Weights for the offsets `-r..=r`, `r = radius as i32`.
pub fn gaussian_weights(radius: f32, sigma: f32) -> Vec<f32> {
    let r = radius as i32;
    (-r..=r).map(|i| gaussian_weight(i as f32, sigma)).collect()
}

/// One-dimensional convolution along `direction` (in texels per tap).
///
/// Output is divided by the weight sum, so a constant image comes back
/// unchanged whatever the edge handling. Directions other than the two
/// axes are accepted and produce a diagonal blur.
pub fn blur_axis(image: &HdrImage, direction: [f32; 2], radius: f32, sigma: f32) -> HdrImage {
    let r = radius as i32;
    let weights = gaussian_weights(radius, sigma);
    let weight_sum: f32 = weights.iter().sum();

    let mut out = HdrImage::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let mut acc: Rgba = [0.0; 4];
            for (i, &w) in (-r..=r).zip(&weights) {
                let offset = i as f32;
                let s = image.sample_bilinear(
                    x as f32 + direction[0] * offset,
                    y as f32 + direction[1] * offset,
                );
                acc = add(acc, scale(s, w));
            }
            out.set(x, y, scale(acc, 1.0 / weight_sum));
        }
    }
    out
}

/// Horizontal then vertical blur, repeated `params.passes` times.
pub fn blur_separable(image: &HdrImage, params: &BlurParams) -> HdrImage {
    let mut current = image.clone();
    for _ in 0..params.passes {
        let h = blur_axis(&current, HORIZONTAL, params.radius, params.sigma);
        current = blur_axis(&h, VERTICAL, params.radius, params.sigma);
    }
    current
}

/// Direct (non-separable) 2D Gaussian with clamp-to-edge addressing.
/// `(2r+1)^2` taps per pixel; only used to check the separable path.
pub fn gaussian_blur_2d(image: &HdrImage, radius: f32, sigma: f32) -> HdrImage {
    let r = radius as i32;
    let weights = gaussian_weights(radius, sigma);
    let weight_sum: f32 = weights.iter().sum();
    let norm = 1.0 / (weight_sum * weight_sum);

    let mut out = HdrImage::new(image.width(), image.height());
    for y in 0..image.height() {
        for x in 0..image.width() {
            let mut acc: Rgba = [0.0; 4];
            for (j, &wy) in (-r..=r).zip(&weights) {
                for (i, &wx) in (-r..=r).zip(&weights) {
                    let s = image.texel_clamped(x as i64 + i as i64, y as i64 + j as i64);
                    acc = add(acc, scale(s, wx * wy));
                }
            }
            out.set(x, y, scale(acc, norm));
        }
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
