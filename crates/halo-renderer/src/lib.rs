//! Bloom post-processing for HDR frames.
//!
//! - `shaders`: the WGSL stages (fullscreen triangle, brightness extraction,
//!   separable Gaussian blur, composite)
//! - `bloom`: the wgpu pipeline that chains them
//! - `gpu`: headless device creation, texture upload and readback
//! - `kernel`: a CPU rendition of every stage, used for tests and as a
//!   fallback renderer

pub mod bloom;
pub mod gpu;
pub mod kernel;
pub mod shaders;

pub use bloom::{render_bloom, BloomPipeline, BloomSettings};
pub use gpu::{GpuContext, RendererError};
pub use kernel::{run_bloom, HdrImage};
