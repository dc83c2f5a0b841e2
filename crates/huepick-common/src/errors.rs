use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("unparseable color {input:?}: {reason}")]
    Unparseable { input: String, reason: String },

    #[error("invalid {component} component: {value:?}")]
    InvalidComponent {
        component: &'static str,
        value: String,
    },

    #[error("color serialization error: {0}")]
    Serialize(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HuepickError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        let err = ColorError::Unparseable {
            input: "#".into(),
            reason: "invalid hex format".into(),
        };
        assert_eq!(err.to_string(), "unparseable color \"#\": invalid hex format");

        let err = ColorError::InvalidComponent {
            component: "cyan",
            value: "1.2.3".into(),
        };
        assert_eq!(err.to_string(), "invalid cyan component: \"1.2.3\"");

        let err = ColorError::Serialize("boom".into());
        assert_eq!(err.to_string(), "color serialization error: boom");
    }

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("output.swatch_width = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: output.swatch_width = 0"
        );
    }

    #[test]
    fn huepick_error_from_color() {
        let color_err = ColorError::Unparseable {
            input: "blurple".into(),
            reason: "invalid unknown format".into(),
        };
        let err: HuepickError = color_err.into();
        assert!(matches!(err, HuepickError::Color(_)));
        assert!(err.to_string().contains("blurple"));
    }

    #[test]
    fn huepick_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: HuepickError = config_err.into();
        assert!(matches!(err, HuepickError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn huepick_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: HuepickError = io_err.into();
        assert!(matches!(err, HuepickError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn huepick_error_other() {
        let err = HuepickError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
