//! Result assembly: detect, correct, parse, then project into display entries.


use huepick_common::{ColorError, DisplayEntry};

use crate::correct::{correct, Corrected};
use crate::engine::{ColorEngine, ColorProjection, CssEngine};
use crate::notation::{detect, Notation};

/// The notations every description lists, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Hex,
    Rgb,
    Hsl,
    CmykJson,
    Cmyk,
}

impl Projection {
    pub const ALL: [Projection; 5] = [
        Projection::Hex,
        Projection::Rgb,
        Projection::Hsl,
        Projection::CmykJson,
        Projection::Cmyk,
    ];

    /// Human label shown next to the rendered color.
    pub fn label(self) -> &'static str {
        match self {
            Projection::Hex => "CSS Hexadecimal",
            Projection::Rgb => "CSS RGB",
            Projection::Hsl => "CSS HSL",
            Projection::CmykJson => "CMYK JSON",
            Projection::Cmyk => "CMYK",
        }
    }

    /// Render `color` in this notation.
    pub fn render<C: ColorProjection>(self, color: &C) -> Result<String, ColorError> {
        Ok(match self {
            Projection::Hex => color.to_hex(),
            Projection::Rgb => color.to_rgb_string(),
            Projection::Hsl => color.to_hsl_string(),
            Projection::CmykJson => serde_json::to_string(&color.to_cmyk())
                .map_err(|e| ColorError::Serialize(e.to_string()))?,
            Projection::Cmyk => color.to_cmyk_string(),
        })
    }
}

/// Describes color text using an injected engine.
#[derive(Debug, Clone, Default)]
pub struct Describer<E> {
    engine: E,
}

impl<E: ColorEngine> Describer<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Detect the notation of `input` and describe it.
    pub fn describe(&self, input: &str) -> Result<Vec<DisplayEntry>, ColorError> {
        self.describe_as(input, detect(input))
    }

    /// Describe `input` as the given notation.
    ///
    /// Without a notation there is nothing to describe and the result is
    /// empty. Engine errors are returned unchanged.
    pub fn describe_as(
        &self,
        input: &str,
        notation: Option<Notation>,
    ) -> Result<Vec<DisplayEntry>, ColorError> {
        let Some(notation) = notation else {
            tracing::debug!(input, "no notation, nothing to describe");
            return Ok(Vec::new());
        };

        let color = match correct(notation, input) {
            None => self.engine.parse_str(input)?,
            Some(Corrected::Hex(s) | Corrected::Formatted(s)) => self.engine.parse_str(&s)?,
            Some(Corrected::Cmyk(fields)) => self.engine.parse_cmyk(&fields)?,
        };

        let icon_color = color.to_hex();
        Projection::ALL
            .iter()
            .map(|projection| {
                Ok(DisplayEntry::new(
                    projection.render(&color)?,
                    projection.label(),
                    icon_color.as_str(),
                ))
            })
            .collect()
    }
}

/// Describe `input` with the built-in [`CssEngine`].
///
/// ```rust
/// let labels: Vec<_> = huepick_core::describe("red")
///     .unwrap()
///     .into_iter()
///     .map(|e| e.subtitle)
///     .collect();
/// assert_eq!(labels, ["CSS Hexadecimal", "CSS RGB", "CSS HSL", "CMYK JSON", "CMYK"]);
/// ```
pub fn describe(input: &str) -> Result<Vec<DisplayEntry>, ColorError> {
    Describer::new(CssEngine).describe(input)
}

/// Describe `input` as `notation` with the built-in [`CssEngine`].
pub fn describe_as(
    input: &str,
    notation: Option<Notation>,
) -> Result<Vec<DisplayEntry>, ColorError> {
    Describer::new(CssEngine).describe_as(input, notation)
}
