//! Bloom post-processing pipeline.
//!
//! Extracts bright regions of an HDR scene, blurs them with a separable
//! Gaussian (horizontal then vertical, repeated per pass), and adds the
//! result back onto the scene. With `bloom.enabled = false` the scene is
//! copied through unchanged.

mod headless;
mod pipeline;
mod types;

pub use headless::*;
pub use pipeline::*;
pub use types::*;
