//! Configuration schema types for Halo.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bloom;
mod render;
mod system;

pub use bloom::*;
pub use render::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for Halo.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HaloConfig {
    pub bloom: BloomConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
