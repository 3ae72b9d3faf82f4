pub mod errors;

pub use errors::{ConfigError, HaloError};

pub type Result<T> = std::result::Result<T, HaloError>;
