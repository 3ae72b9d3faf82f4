//! Deterministic HDR test pattern.
//!
//! A dark diagonal gradient with a few emissive discs and one bright bar,
//! so every bloom stage has something to act on: sub-threshold background,
//! values inside the soft knee, and values well above 1.0.

use halo_renderer::kernel::{HdrImage, Rgba};

struct Disc {
    /// Center as a fraction of the image size.
    center: [f32; 2],
    /// Radius as a fraction of the image height.
    radius: f32,
    color: Rgba,
}

const DISCS: [Disc; 4] = [
    Disc {
        center: [0.25, 0.35],
        radius: 0.08,
        color: [4.0, 2.2, 0.8, 1.0],
    },
    Disc {
        center: [0.6, 0.3],
        radius: 0.05,
        color: [1.2, 2.8, 3.5, 1.0],
    },
    Disc {
        center: [0.8, 0.55],
        radius: 0.03,
        color: [3.0, 3.0, 3.0, 1.0],
    },
    Disc {
        center: [0.4, 0.6],
        radius: 0.06,
        color: [0.75, 0.7, 0.6, 1.0],
    },
];

/// Bar across the lower part of the frame, as fractions of the size.
const BAR_X: [f32; 2] = [0.1, 0.9];
const BAR_Y: [f32; 2] = [0.8, 0.83];
const BAR_COLOR: Rgba = [2.0, 0.4, 1.6, 1.0];

fn background(u: f32, v: f32) -> Rgba {
    let t = (u + v) * 0.5;
    [0.02 + 0.10 * t, 0.03 + 0.08 * t, 0.06 + 0.12 * t, 1.0]
}

/// Build the pattern at `width` x `height`.
pub fn synthetic_scene(width: u32, height: u32) -> HdrImage {
    let mut image = HdrImage::new(width, height);
    let (w, h) = (width.max(1) as f32, height.max(1) as f32);

    for y in 0..height {
        for x in 0..width {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let (u, v) = (px / w, py / h);

            let mut color = background(u, v);

            if (BAR_X[0]..BAR_X[1]).contains(&u) && (BAR_Y[0]..BAR_Y[1]).contains(&v) {
                color = BAR_COLOR;
            }

            for disc in &DISCS {
                let dx = px - disc.center[0] * w;
                let dy = py - disc.center[1] * h;
                let r = disc.radius * h;
                if dx * dx + dy * dy <= r * r {
                    color = disc.color;
                }
            }

            image.set(x, y, color);
        }
    }

    image
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use halo_renderer::kernel::luminance;

    #[test]
    fn scene_has_requested_size() {
        let s = synthetic_scene(320, 180);
        assert_eq!(s.width(), 320);
        assert_eq!(s.height(), 180);
    }

    #[test]
    fn scene_is_deterministic() {
        assert_eq!(synthetic_scene(64, 48), synthetic_scene(64, 48));
    }

    #[test]
    fn background_stays_below_default_threshold() {
        let s = synthetic_scene(200, 100);
        assert!(luminance(s.get(0, 0)) < 0.2);
        assert!(luminance(s.get(199, 0)) < 0.2);
    }

    #[test]
    fn emissive_regions_exceed_one() {
        let s = synthetic_scene(200, 100);
        // first disc center
        assert!(luminance(s.get(50, 35)) > 1.0);
        // bar
        assert_eq!(s.get(100, 81), BAR_COLOR);
    }

    #[test]
    fn dim_disc_sits_near_the_knee() {
        let s = synthetic_scene(200, 100);
        let lum = luminance(s.get(80, 60));
        assert!(lum > 0.6 && lum < 0.8, "lum = {lum}");
    }
}
