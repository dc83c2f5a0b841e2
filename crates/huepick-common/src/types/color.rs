use csscolorparser::Color;
use serde::{Deserialize, Serialize};

use super::cmyk::Cmyka;

/// Round `value` to `digits` decimal places.
///
/// Adding `0.0` folds `-0.0` into `0.0` so formatted output never shows `-0`.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let base = 10f64.powi(digits);
    (value * base).round() / base + 0.0
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// An sRGB color with channels in `0..=255` and alpha in `0..=1`.
///
/// Channels stay unrounded so that conversions between models do not
/// accumulate rounding error; projections round at the very end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// HSL with hue in degrees and saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Rgba {
    /// Create a color, clamping every component into range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp(r, 0.0, 255.0),
            g: clamp(g, 0.0, 255.0),
            b: clamp(b, 0.0, 255.0),
            a: clamp(a, 0.0, 1.0),
        }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r.into(), g.into(), b.into(), f64::from(a) / 255.0)
    }

    /// Hue wraps around the circle; saturation and lightness clamp to `0..=100`.
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let Color { r, g, b, a } = Color::from_hsla(
            h.rem_euclid(360.0),
            clamp(s, 0.0, 100.0) / 100.0,
            clamp(l, 0.0, 100.0) / 100.0,
            a,
        );
        Self::new(r * 255.0, g * 255.0, b * 255.0, a)
    }

    /// Components are percentages in `0..=100`.
    pub fn from_cmyka(cmyka: &Cmyka) -> Self {
        let c = clamp(cmyka.c, 0.0, 100.0) / 100.0;
        let m = clamp(cmyka.m, 0.0, 100.0) / 100.0;
        let y = clamp(cmyka.y, 0.0, 100.0) / 100.0;
        let k = clamp(cmyka.k, 0.0, 100.0) / 100.0;

        Self::new(
            255.0 * (1.0 - c) * (1.0 - k),
            255.0 * (1.0 - m) * (1.0 - k),
            255.0 * (1.0 - y) * (1.0 - k),
            cmyka.a,
        )
    }

    pub fn is_opaque(&self) -> bool {
        round_to(self.a, 3) >= 1.0
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }

    /// Achromatic colors report a hue of `0`.
    pub fn to_hsla(&self) -> Hsla {
        let (h, s, l, a) =
            Color::new(self.r / 255.0, self.g / 255.0, self.b / 255.0, self.a).to_hsla();
        Hsla {
            h: if h.is_nan() { 0.0 } else { h.rem_euclid(360.0) },
            s: s * 100.0,
            l: l * 100.0,
            a,
        }
    }

    pub fn to_cmyka(&self) -> Cmyka {
        let r = self.r / 255.0;
        let g = self.g / 255.0;
        let b = self.b / 255.0;

        let k = 1.0 - r.max(g).max(b);
        let part = |channel: f64| {
            if k >= 1.0 {
                0.0
            } else {
                (1.0 - channel - k) / (1.0 - k)
            }
        };

        Cmyka {
            c: part(r) * 100.0,
            m: part(g) * 100.0,
            y: part(b) * 100.0,
            k: k * 100.0,
            a: self.a,
        }
    }

    /// `#rrggbb`, or `#rrggbbaa` for translucent colors.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    pub fn to_rgb_string(&self) -> String {
        let r = round_to(self.r, 0);
        let g = round_to(self.g, 0);
        let b = round_to(self.b, 0);
        if self.is_opaque() {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {})", round_to(self.a, 3))
        }
    }

    pub fn to_hsl_string(&self) -> String {
        let hsla = self.to_hsla();
        let h = round_to(hsla.h, 0);
        let s = round_to(hsla.s, 0);
        let l = round_to(hsla.l, 0);
        if self.is_opaque() {
            format!("hsl({h}, {s}%, {l}%)")
        } else {
            format!("hsla({h}, {s}%, {l}%, {})", round_to(self.a, 3))
        }
    }

    /// CSS `device-cmyk()` notation with percentages.
    pub fn to_cmyk_string(&self) -> String {
        let Cmyka { c, m, y, k, a } = self.to_cmyka().rounded();
        if self.is_opaque() {
            format!("device-cmyk({c}% {m}% {y}% {k}%)")
        } else {
            format!("device-cmyk({c}% {m}% {y}% {k}% / {a})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_components() {
        let c = Rgba::new(300.0, -5.0, 128.0, 2.0);
        assert_eq!(c, Rgba::new(255.0, 0.0, 128.0, 1.0));
    }

    #[test]
    fn new_maps_nan_to_minimum() {
        let c = Rgba::new(f64::NAN, 0.0, 0.0, 1.0);
        assert_eq!(c.r, 0.0);
    }

    #[test]
    fn hex_omits_opaque_alpha() {
        assert_eq!(Rgba::from_rgba8(255, 136, 0, 255).to_hex(), "#ff8800");
        assert_eq!(Rgba::from_rgba8(255, 136, 0, 128).to_hex(), "#ff880080");
    }

    #[test]
    fn rgb_string_switches_to_rgba_for_translucency() {
        assert_eq!(
            Rgba::from_rgba8(10, 20, 30, 255).to_rgb_string(),
            "rgb(10, 20, 30)"
        );
        assert_eq!(
            Rgba::new(10.0, 20.0, 30.0, 0.5).to_rgb_string(),
            "rgba(10, 20, 30, 0.5)"
        );
    }

    #[test]
    fn hsl_round_trip_for_primaries() {
        let red = Rgba::from_hsla(0.0, 100.0, 50.0, 1.0);
        assert_eq!(red.to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(red.to_hsl_string(), "hsl(0, 100%, 50%)");

        let sky = Rgba::from_hsla(200.0, 100.0, 50.0, 1.0);
        assert_eq!(sky.to_hex(), "#00aaff");
        assert_eq!(sky.to_hsl_string(), "hsl(200, 100%, 50%)");
    }

    #[test]
    fn hsl_conversions_match_css_parsing() {
        let parsed = csscolorparser::parse("hsl(33, 47%, 61%)").unwrap();
        let ours = Rgba::from_hsla(33.0, 47.0, 61.0, 1.0);
        assert_eq!(ours.to_rgba8(), parsed.to_rgba8());

        let hsla = ours.to_hsla();
        assert_eq!(
            (round_to(hsla.h, 0), round_to(hsla.s, 0), round_to(hsla.l, 0)),
            (33.0, 47.0, 61.0)
        );
    }

    #[test]
    fn hue_wraps_around() {
        let a = Rgba::from_hsla(-120.0, 100.0, 50.0, 1.0);
        let b = Rgba::from_hsla(240.0, 100.0, 50.0, 1.0);
        assert_eq!(a.to_rgba8(), b.to_rgba8());
    }

    #[test]
    fn grey_has_no_hue_or_saturation() {
        let hsla = Rgba::from_rgba8(128, 128, 128, 255).to_hsla();
        assert_eq!(hsla.h, 0.0);
        assert_eq!(hsla.s, 0.0);
    }

    #[test]
    fn cmyk_of_black_has_no_ink_but_key() {
        let cmyka = Rgba::from_rgba8(0, 0, 0, 255).to_cmyka();
        assert_eq!((cmyka.c, cmyka.m, cmyka.y, cmyka.k), (0.0, 0.0, 0.0, 100.0));
    }

    #[test]
    fn cmyk_string_for_red() {
        let red = Rgba::from_rgba8(255, 0, 0, 255);
        assert_eq!(red.to_cmyk_string(), "device-cmyk(0% 100% 100% 0%)");
        let faded = Rgba::new(255.0, 0.0, 0.0, 0.25);
        assert_eq!(faded.to_cmyk_string(), "device-cmyk(0% 100% 100% 0% / 0.25)");
    }

    #[test]
    fn from_cmyka_inverts_to_cmyka() {
        let cmyka = Cmyka {
            c: 0.0,
            m: 20.0,
            y: 30.0,
            k: 40.0,
            a: 1.0,
        };
        let round_trip = Rgba::from_cmyka(&cmyka).to_cmyka().rounded();
        assert_eq!(round_trip, cmyka);
    }

    #[test]
    fn round_to_never_yields_negative_zero() {
        assert_eq!(round_to(-0.0001, 2).to_string(), "0");
        assert_eq!(round_to(12.345_6, 2), 12.35);
    }
}
