pub mod errors;
pub mod types;

pub use errors::{ColorError, ConfigError, HuepickError};
pub use types::{CmykFields, Cmyka, DisplayEntry, Hsla, Rgba};

pub type Result<T> = std::result::Result<T, HuepickError>;
