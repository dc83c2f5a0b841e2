//! Built-in engine on top of `csscolorparser`.

use huepick_common::{CmykFields, Cmyka, ColorError, Rgba};
use regex::Regex;
use std::sync::LazyLock;

use super::ColorEngine;

/// Legacy comma-separated `hsl()`/`hsla()`, with or without `%` on saturation
/// and lightness. Unitless values are read as percentages.
static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*([+-]?\d*\.?\d+)(?:deg)?\s*,\s*([+-]?\d*\.?\d+)%?\s*,\s*([+-]?\d*\.?\d+)%?\s*(?:,\s*([+-]?\d*\.?\d+)(%)?\s*)?\)$",
    )
    .unwrap()
});

/// A functional-notation argument list with an empty field: `(,`, `, ,`,
/// `,)` or `()`. `csscolorparser` skips such fields and shifts the rest.
static EMPTY_ARG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*[,)]|,\s*(?:,|\)|$)").unwrap());

/// Default engine: CSS color syntax plus CMYK.
///
/// Accepts everything `csscolorparser` does (hex with or without `#`,
/// `rgb()`, `hsl()`, `hwb()`, `lab()`, `lch()`, CSS named colors) and
/// additionally legacy `hsl()` with unitless percentages, which is what the
/// corrector produces.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssEngine;

impl CssEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ColorEngine for CssEngine {
    type Color = Rgba;

    fn parse_str(&self, input: &str) -> Result<Rgba, ColorError> {
        let s = input.trim();

        if let Some(color) = parse_legacy_hsl(s) {
            tracing::trace!(input = s, "parsed legacy hsl");
            return Ok(color);
        }

        if !s.is_ascii() {
            return Err(ColorError::Unparseable {
                input: input.to_string(),
                reason: "non-ASCII characters".into(),
            });
        }

        if EMPTY_ARG_RE.is_match(s) {
            return Err(ColorError::Unparseable {
                input: input.to_string(),
                reason: "empty argument".into(),
            });
        }

        let color = csscolorparser::parse(s).map_err(|e| ColorError::Unparseable {
            input: input.to_string(),
            reason: e.to_string(),
        })?;
        let [r, g, b, a] = color.to_array();
        tracing::trace!(input = s, "parsed css color");
        Ok(Rgba::new(
            f64::from(r) * 255.0,
            f64::from(g) * 255.0,
            f64::from(b) * 255.0,
            f64::from(a),
        ))
    }

    fn parse_cmyk(&self, fields: &CmykFields) -> Result<Rgba, ColorError> {
        let cmyka = Cmyka {
            c: parse_component("cyan", &fields.c)?,
            m: parse_component("magenta", &fields.m)?,
            y: parse_component("yellow", &fields.y)?,
            k: parse_component("key", &fields.k)?,
            a: 1.0,
        };
        tracing::trace!(?cmyka, "parsed cmyk fields");
        Ok(Rgba::from_cmyka(&cmyka))
    }
}

fn parse_legacy_hsl(s: &str) -> Option<Rgba> {
    let caps = HSL_RE.captures(s)?;
    let h: f64 = caps[1].parse().ok()?;
    let sat: f64 = caps[2].parse().ok()?;
    let l: f64 = caps[3].parse().ok()?;

    let a = match caps.get(4) {
        Some(m) => {
            let a: f64 = m.as_str().parse().ok()?;
            if caps.get(5).is_some() {
                a / 100.0
            } else {
                a
            }
        }
        None => 1.0,
    };

    Some(Rgba::from_hsla(h, sat, l, a))
}

fn parse_component(component: &'static str, value: &str) -> Result<f64, ColorError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorError::InvalidComponent {
            component,
            value: value.to_string(),
        })
}
