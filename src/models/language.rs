use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Languages every script is published in
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Language {
    Es,
    #[default]
    En,
    Pt,
}

impl Language {
    /// Display order used by every language selector
    pub const ALL: [Language; 3] = [Language::Es, Language::En, Language::Pt];

    /// Wire code (`es`, `en`, `pt`)
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Es => "Spanish",
            Language::En => "English",
            Language::Pt => "Portuguese",
        }
    }

    pub fn flag(&self) -> &'static str {
        match self {
            Language::Es => "🇪🇸",
            Language::En => "🇬🇧",
            Language::Pt => "🇧🇷",
        }
    }

    /// Selector label, e.g. "🇪🇸 Spanish"
    pub fn selector_label(&self) -> String {
        format!("{} {}", self.flag(), self.label())
    }
}

/// One body of text per supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub es: String,
    pub en: String,
    pub pt: String,
}

impl LocalizedText {
    pub fn new(es: impl Into<String>, en: impl Into<String>, pt: impl Into<String>) -> Self {
        Self {
            es: es.into(),
            en: en.into(),
            pt: pt.into(),
        }
    }

    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
            Language::Pt => &self.pt,
        }
    }

    /// Iterate `(language, text)` pairs in selector order
    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        Language::ALL.into_iter().map(move |lang| (lang, self.get(lang)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_str(lang.code()).unwrap(), lang);
            assert_eq!(lang.to_string(), lang.code());
        }
        assert_eq!(Language::from_str("PT").unwrap(), Language::Pt);
        assert!(Language::from_str("fr").is_err());
    }

    #[test]
    fn test_all_matches_declaration_order() {
        use strum::IntoEnumIterator;
        assert_eq!(Language::iter().collect::<Vec<_>>(), Language::ALL.to_vec());
    }

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_localized_lookup() {
        let text = LocalizedText::new("hola", "hello", "olá");
        assert_eq!(text.get(Language::Es), "hola");
        assert_eq!(text.get(Language::Pt), "olá");
        let langs: Vec<_> = text.iter().map(|(l, _)| l).collect();
        assert_eq!(langs, Language::ALL.to_vec());
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&Language::Pt).unwrap();
        assert_eq!(json, "\"pt\"");
        assert_eq!(Language::Es.selector_label(), "🇪🇸 Spanish");
    }
}
