//! Correction of partial or noisy color text.
//!
//! Each function turns whatever the user typed so far into something the
//! engine can parse, filling in defaults for missing fields. Nothing here
//! fails: fragments that are still malformed after correction are left for
//! the engine to reject.


use huepick_common::CmykFields;

use crate::notation::Notation;

/// Output of correction, shaped by what the engine entry point expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Corrected {
    /// `#` followed by eight hex digits, or a bare `#` for empty input.
    Hex(String),
    /// A functional notation such as `rgba(10, 20, 30, 1)`.
    Formatted(String),
    /// CMYK fields for the engine's structured entry point.
    Cmyk(CmykFields),
}

/// Correct `input` for the given notation.
///
/// Named colors pass through to the engine untouched, so `Named` yields `None`.
pub fn correct(notation: Notation, input: &str) -> Option<Corrected> {
    let corrected = match notation {
        Notation::Hex => Corrected::Hex(correct_hex(input)),
        Notation::Rgb => Corrected::Formatted(correct_rgb(input)),
        Notation::Hsl => Corrected::Formatted(correct_hsl(input)),
        Notation::Cmyk => Corrected::Cmyk(correct_cmyk(input)),
        Notation::Named => return None,
    };
    tracing::debug!(input, ?corrected, "corrected color input");
    Some(corrected)
}

/// Expand shorthand hex to `#rrggbbaa`.
///
/// - `a` => `#aa0000ff`
/// - `ab` => `#aabb00ff`
/// - `abc` => `#aabbccff`
/// - `abcd` => `#aabbccdd`
/// - `abcde` => `#abcde0ff`
pub fn correct_hex(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|&c| c != '#').collect();
    if digits.is_empty() {
        return "#".into();
    }

    let mut output: Vec<char> = if digits.len() <= 4 {
        digits.iter().flat_map(|&c| [c, c]).collect()
    } else {
        digits
    };
    pad_end(&mut output, 6, '0');
    pad_end(&mut output, 8, 'f');

    let mut hex = String::with_capacity(output.len() + 1);
    hex.push('#');
    hex.extend(output);
    hex
}

/// `rgb(10 20` => `rgba(10, 20, 0, 1)`.
pub fn correct_rgb(input: &str) -> String {
    let numbers = numeric_residue(input);
    let [r, g, b, a] = fields(&numbers, ["", "0", "0", "1"]);
    format!("rgba({r}, {g}, {b}, {a})")
}

/// `hsl(200)` => `hsla(200, 100, 50, 1)`.
pub fn correct_hsl(input: &str) -> String {
    let numbers = numeric_residue(input);
    let [h, s, l, a] = fields(&numbers, ["", "100", "50", "1"]);
    format!("hsla({h}, {s}, {l}, {a})")
}

/// `cmyk 0,100` => c=`0`, m=`100`, y=`0`, k=`0`.
pub fn correct_cmyk(input: &str) -> CmykFields {
    let numbers = numeric_residue(input);
    let [c, m, y, k] = fields(&numbers, ["0", "0", "0", "0"]);
    CmykFields {
        c: c.into(),
        m: m.into(),
        y: y.into(),
        k: k.into(),
    }
}

fn pad_end(chars: &mut Vec<char>, len: usize, fill: char) {
    if chars.len() < len {
        chars.resize(len, fill);
    }
}

/// Keep only ASCII digits, commas and periods.
fn numeric_residue(input: &str) -> String {
    input
        .chars()
        .filter(|&c| c.is_ascii_digit() || c == ',' || c == '.')
        .collect()
}

/// Split on commas into four fields, using `defaults` for absent ones.
///
/// A present but empty fragment stays empty; only missing positions take the
/// default. The first field always exists since splitting yields at least one
/// fragment. Anything past the fourth field is dropped.
fn fields<'a>(numbers: &'a str, defaults: [&'a str; 4]) -> [&'a str; 4] {
    let mut parts = numbers.split(',');
    defaults.map(|default| parts.next().unwrap_or(default))
}
