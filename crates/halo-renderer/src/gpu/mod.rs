mod context;
mod texture;
mod types;

pub use context::*;
pub use texture::*;
pub use types::*;
