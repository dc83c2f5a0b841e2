//! Tests for config validation.

use super::*;

#[test]
fn default_config_validates() {
    let config = HuepickConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_swatch_width_too_small() {
    let mut config = HuepickConfig::default();
    config.output.swatch_width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("output.swatch_width"));
}

#[test]
fn catches_swatch_width_too_large() {
    let mut config = HuepickConfig::default();
    config.output.swatch_width = 9;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("output.swatch_width = 9 is out of range [1, 8]"));
}

#[test]
fn boundary_swatch_widths_are_valid() {
    let mut config = HuepickConfig::default();
    config.output.swatch_width = 1;
    assert!(validate(&config).is_ok());
    config.output.swatch_width = 8;
    assert!(validate(&config).is_ok());
}
