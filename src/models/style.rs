use serde::{Deserialize, Serialize};

/// Visual styling for one generation run: accent and text colors as hex
/// strings plus the font family name. Immutable once handed to the
/// converter; malformed hex is rejected there with `InvalidColor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleConfig {
    /// Accent color used for headers, underlines, primary shapes.
    pub primary_color: String,
    /// Color of slide titles.
    pub title_color: String,
    /// Color of body text.
    pub body_color: String,
    /// Font family applied to every text range.
    pub font_family: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            primary_color: "#4285F4".to_string(),
            title_color: "#333333".to_string(),
            body_color: "#333333".to_string(),
            font_family: "Meiryo".to_string(),
        }
    }
}
