//! Scalar helpers with WGSL semantics.

/// Rec.709 relative luminance weights.
pub const LUMA_WEIGHTS: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Linear RGBA, premultiplication left to the caller.
pub type Rgba = [f32; 4];

/// Relative luminance of a color's RGB channels. Alpha is ignored.
pub fn luminance(color: Rgba) -> f32 {
    color[0] * LUMA_WEIGHTS[0] + color[1] * LUMA_WEIGHTS[1] + color[2] * LUMA_WEIGHTS[2]
}

/// Hermite interpolation between `edge0` and `edge1`, as WGSL `smoothstep`.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Linear blend, as WGSL `mix`. Returns `a` exactly at 0 and `b` exactly at 1.
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

pub fn scale(color: Rgba, factor: f32) -> Rgba {
    [
        color[0] * factor,
        color[1] * factor,
        color[2] * factor,
        color[3] * factor,
    ]
}

pub fn add(a: Rgba, b: Rgba) -> Rgba {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]]
}

// =============================================================================
// Tests
// =============================================================================
