//! The color engine seam.
//!
//! Detection and correction only reshape text. Turning that text into a color
//! and back into notations is the engine's job, behind [`ColorEngine`], so a
//! different color-math backend can be plugged into a [`Describer`].
//!
//! [`Describer`]: crate::Describer

mod css;


pub use css::CssEngine;

use huepick_common::{CmykFields, Cmyka, ColorError, Rgba};

/// Parses corrected input into a normalized color.
pub trait ColorEngine {
    type Color: ColorProjection;

    /// Parse a color string: hex, functional notation, or a color name.
    fn parse_str(&self, input: &str) -> Result<Self::Color, ColorError>;

    /// Parse structured CMYK fields.
    fn parse_cmyk(&self, fields: &CmykFields) -> Result<Self::Color, ColorError>;
}

/// Notations a normalized color can be rendered in.
///
/// Every method must be a pure function of the color.
pub trait ColorProjection {
    fn to_hex(&self) -> String;
    fn to_rgb_string(&self) -> String;
    fn to_hsl_string(&self) -> String;
    fn to_cmyk(&self) -> Cmyka;
    fn to_cmyk_string(&self) -> String;
}

impl ColorProjection for Rgba {
    fn to_hex(&self) -> String {
        Rgba::to_hex(self)
    }

    fn to_rgb_string(&self) -> String {
        Rgba::to_rgb_string(self)
    }

    fn to_hsl_string(&self) -> String {
        Rgba::to_hsl_string(self)
    }

    fn to_cmyk(&self) -> Cmyka {
        self.to_cmyka().rounded()
    }

    fn to_cmyk_string(&self) -> String {
        Rgba::to_cmyk_string(self)
    }
}
