//! Output configuration types.

use serde::{Deserialize, Serialize};

/// How descriptions are printed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OutputFormat {
    /// One aligned line per entry.
    #[default]
    Plain,
    /// A JSON array of entries per input.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Paint a true-color swatch before each plain entry.
    pub swatch: bool,
    /// Swatch width in terminal cells (valid range: 1-8).
    pub swatch_width: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            swatch: true,
            swatch_width: 2,
        }
    }
}
