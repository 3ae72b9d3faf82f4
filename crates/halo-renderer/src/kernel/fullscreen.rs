//! Fullscreen-triangle vertex positions.

/// Clip-space position emitted by the vertex stage for `index` in 0..3.
///
/// 0 -> (-1,-1), 1 -> (3,-1), 2 -> (-1,3).
pub fn fullscreen_vertex(index: u32) -> [f32; 2] {
    let x = ((index << 1) & 2) as f32 * 2.0 - 1.0;
    let y = (index & 2) as f32 * 2.0 - 1.0;
    [x, y]
}

pub fn fullscreen_triangle() -> [[f32; 2]; 3] {
    [
        fullscreen_vertex(0),
        fullscreen_vertex(1),
        fullscreen_vertex(2),
    ]
}

fn edge(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
}

/// Whether `p` lies inside or on the boundary of the counter-clockwise
/// triangle `tri`.
pub fn triangle_contains(tri: [[f32; 2]; 3], p: [f32; 2]) -> bool {
    edge(tri[0], tri[1], p) >= 0.0 && edge(tri[1], tri[2], p) >= 0.0 && edge(tri[2], tri[0], p) >= 0.0
}

// =============================================================================
// Tests
// =============================================================================
