//! Text rendering of descriptions for the terminal.

use huepick_common::{DisplayEntry, HuepickError};
use huepick_config::schema::OutputConfig;
use huepick_config::OutputFormat;

/// Formats descriptions according to the output config.
#[derive(Debug, Clone)]
pub struct Renderer {
    format: OutputFormat,
    swatch_width: Option<usize>,
}

impl Renderer {
    pub fn new(config: &OutputConfig, format: OutputFormat) -> Self {
        Self {
            format,
            swatch_width: config.swatch.then_some(config.swatch_width as usize),
        }
    }

    /// Render the description of one input.
    pub fn render(&self, input: &str, entries: &[DisplayEntry]) -> Result<String, HuepickError> {
        match self.format {
            OutputFormat::Json => serde_json::to_string(entries)
                .map_err(|e| HuepickError::Other(format!("failed to serialize entries: {e}"))),
            OutputFormat::Plain => Ok(self.render_plain(input, entries)),
        }
    }

    fn render_plain(&self, input: &str, entries: &[DisplayEntry]) -> String {
        let width = entries
            .iter()
            .map(|e| e.title.chars().count())
            .max()
            .unwrap_or(0);

        let mut out = format!("{input}\n");
        for entry in entries {
            out.push_str("  ");
            if let Some(cells) = self.swatch_width {
                out.push_str(&swatch(&entry.icon_color, cells));
                out.push(' ');
            }
            out.push_str(&format!(
                "{:<width$}  {}\n",
                entry.title,
                entry.subtitle,
                width = width
            ));
        }
        out
    }
}

/// A block of `cells` spaces on a true-color background.
///
/// Falls back to blank cells when `hex` is not `#rrggbb` or `#rrggbbaa`.
fn swatch(hex: &str, cells: usize) -> String {
    let blank = " ".repeat(cells);
    match hex_rgb(hex) {
        Some([r, g, b]) => format!("\x1b[48;2;{r};{g};{b}m{blank}\x1b[0m"),
        None => blank,
    }
}

fn hex_rgb(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some([r, g, b])
}
