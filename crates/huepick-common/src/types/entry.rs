use serde::{Deserialize, Serialize};

/// One row of a picker result: a color rendered in a single notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEntry {
    /// The color in this entry's notation, e.g. `rgb(255, 0, 0)`.
    pub title: String,
    /// Human label of the notation, e.g. `CSS RGB`.
    pub subtitle: String,
    /// Hex color a host can use to paint a swatch next to the entry.
    pub icon_color: String,
}

impl DisplayEntry {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon_color: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            icon_color: icon_color.into(),
        }
    }
}
