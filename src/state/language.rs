/// Language selection
///
/// Fixed set of three languages matching the listing's audience.
/// Switching only swaps which static content bundle is rendered; it
/// never touches image or lightbox state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "zh")]
    TraditionalChinese,
    #[serde(rename = "en")]
    English,
}

impl Language {
    /// Display order of the switcher buttons.
    pub const ALL: [Language; 3] = [
        Language::Japanese,
        Language::TraditionalChinese,
        Language::English,
    ];

    /// Native-script label for the switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Language::Japanese => "日本語",
            Language::TraditionalChinese => "繁體中文",
            Language::English => "English",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_japanese() {
        assert_eq!(Language::default(), Language::Japanese);
    }

    #[test]
    fn test_serde_uses_short_codes() {
        assert_eq!(serde_json::to_string(&Language::English).unwrap(), "\"en\"");
        let parsed: Language = serde_json::from_str("\"zh\"").unwrap();
        assert_eq!(parsed, Language::TraditionalChinese);
    }
}
