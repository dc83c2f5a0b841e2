use clap::{Parser, ValueEnum};
use huepick_config::OutputFormat;

/// huepick — turn loose color text into hex, rgb, hsl and cmyk.
#[derive(Parser, Debug)]
#[command(name = "huepick", version, about)]
pub struct Args {
    /// Color text to describe, e.g. `#f00`, `rgb 10 20 30`, `hsl(200)`, `navy`.
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Output format override.
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<FormatArg>,

    /// Only print the detected notation of each input.
    #[arg(long)]
    pub detect: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inputs_and_flags() {
        let args =
            Args::try_parse_from(["huepick", "--format", "json", "#f00", "red"]).unwrap();
        assert_eq!(args.inputs, ["#f00", "red"]);
        assert_eq!(args.format, Some(FormatArg::Json));
        assert!(!args.detect);
    }

    #[test]
    fn requires_at_least_one_input() {
        assert!(Args::try_parse_from(["huepick"]).is_err());
    }

    #[test]
    fn accepts_dash_prefixed_inputs_after_separator() {
        let args = Args::try_parse_from(["huepick", "--detect", "--", "-1"]).unwrap();
        assert!(args.detect);
        assert_eq!(args.inputs, ["-1"]);
    }

    #[test]
    fn format_arg_maps_to_output_format() {
        assert_eq!(OutputFormat::from(FormatArg::Plain), OutputFormat::Plain);
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
    }
}
