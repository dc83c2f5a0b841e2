//! Configuration schema types for huepick.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod output;
mod system;

pub use output::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for huepick.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HuepickConfig {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}
