//! Notation detection.
//!
//! Classifies raw text by its leading characters only. The rule table is
//! ordered and the first match wins, so `#rgb(1,2,3)` is hex.


use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// The closed set of color notations the picker understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notation {
    Hex,
    Rgb,
    Hsl,
    Cmyk,
    Named,
}

impl Notation {
    pub fn name(self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Rgb => "rgb",
            Notation::Hsl => "hsl",
            Notation::Cmyk => "cmyk",
            Notation::Named => "named",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Detection rules in priority order. `Named` is the catch-all and must stay last.
static RULES: LazyLock<[(Notation, Regex); 5]> = LazyLock::new(|| {
    [
        (Notation::Hex, Regex::new(r"^#").unwrap()),
        (Notation::Rgb, Regex::new(r"(?i)^rgb").unwrap()),
        (Notation::Hsl, Regex::new(r"(?i)^hsl").unwrap()),
        (Notation::Cmyk, Regex::new(r"(?i)^cmyk").unwrap()),
        (Notation::Named, Regex::new(r"^.+").unwrap()),
    ]
});

/// Detect the notation of `input`.
///
/// Returns `None` when no rule matches, which happens for the empty string
/// and for text starting with a line break.
pub fn detect(input: &str) -> Option<Notation> {
    let notation = RULES
        .iter()
        .find(|(_, re)| re.is_match(input))
        .map(|(notation, _)| *notation);
    tracing::debug!(input, ?notation, "detected color notation");
    notation
}
