//! Configuration validation.
//!
//! Collects every range violation into a single `ConfigError`.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::HuepickConfig;
use huepick_common::ConfigError;

use helpers::validate_range;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HuepickConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range(
        &mut errors,
        "output.swatch_width",
        config.output.swatch_width,
        1,
        8,
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
