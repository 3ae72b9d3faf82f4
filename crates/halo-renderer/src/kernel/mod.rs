//! CPU reference implementation of the bloom stages.
//!
//! Mirrors the WGSL programs in `shaders/` operation for operation so the
//! stage math can be tested without a GPU, and so a frame can be rendered
//! on machines with no adapter at all.

mod blur;
mod brightness;
mod chain;
mod color;
mod composite;
mod fullscreen;
mod image;

pub use blur::*;
pub use brightness::*;
pub use chain::*;
pub use color::*;
pub use composite::*;
pub use fullscreen::*;
pub use image::*;
