use serde::{Deserialize, Serialize, Serializer};

use super::color::round_to;

/// Raw CMYK fragments as typed by the user, before any numeric parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CmykFields {
    pub c: String,
    pub m: String,
    pub y: String,
    pub k: String,
}

/// CMYK percentages in `0..=100` plus alpha in `0..=1`.
///
/// Serializes whole numbers without a fractional part, so black prints as
/// `{"c":0,"m":0,"y":0,"k":100,"a":1}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyka {
    #[serde(serialize_with = "compact_number")]
    pub c: f64,
    #[serde(serialize_with = "compact_number")]
    pub m: f64,
    #[serde(serialize_with = "compact_number")]
    pub y: f64,
    #[serde(serialize_with = "compact_number")]
    pub k: f64,
    #[serde(serialize_with = "compact_number")]
    pub a: f64,
}

impl Cmyka {
    /// Percentages to two decimals, alpha to three.
    pub fn rounded(&self) -> Self {
        Self {
            c: round_to(self.c, 2),
            m: round_to(self.m, 2),
            y: round_to(self.y, 2),
            k: round_to(self.k, 2),
            a: round_to(self.a, 3),
        }
    }
}

fn compact_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmyka_serializes_whole_numbers_compactly() {
        let cmyka = Cmyka {
            c: 0.0,
            m: 100.0,
            y: 100.0,
            k: 0.0,
            a: 1.0,
        };
        let json = serde_json::to_string(&cmyka).unwrap();
        assert_eq!(json, r#"{"c":0,"m":100,"y":100,"k":0,"a":1}"#);
    }

    #[test]
    fn cmyka_keeps_fractions() {
        let cmyka = Cmyka {
            c: 12.5,
            m: 0.0,
            y: 33.33,
            k: 0.0,
            a: 0.5,
        };
        let json = serde_json::to_string(&cmyka).unwrap();
        assert_eq!(json, r#"{"c":12.5,"m":0,"y":33.33,"k":0,"a":0.5}"#);
    }

    #[test]
    fn cmyka_deserializes_integers() {
        let cmyka: Cmyka = serde_json::from_str(r#"{"c":0,"m":100,"y":100,"k":0,"a":1}"#).unwrap();
        assert_eq!(cmyka.m, 100.0);
    }

    #[test]
    fn rounded_trims_precision() {
        let cmyka = Cmyka {
            c: 33.333_33,
            m: 0.004,
            y: 99.999,
            k: 1.0,
            a: 0.123_45,
        }
        .rounded();
        assert_eq!(cmyka.c, 33.33);
        assert_eq!(cmyka.m, 0.0);
        assert_eq!(cmyka.y, 100.0);
        assert_eq!(cmyka.a, 0.123);
    }
}
