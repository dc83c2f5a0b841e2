//! Default TOML config template with inline documentation comments.

/// The default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# huepick configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[output]
# format = "plain"       # plain, json
# swatch = true          # true-color swatch before each plain entry
# swatch_width = 2       # 1-8 cells

[logging]
# level = "WARNING"      # DEBUG, INFO, WARNING, ERROR
"##
}
