//! Localization tables for the UI chrome.
//!
//! Lookup is synchronous so components can translate at render time. Each
//! locale's table is bundled JSON, parsed once on first use. A key missing
//! from the active locale falls back to English, then to the key itself.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    /// BCP 47-ish tag used on the command line and in the settings file.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Parse a command-line tag.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|l| l.tag() == tag)
    }

    /// Name of the language in the language itself, for the picker.
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Zh => "中文",
        }
    }

    fn table(&self) -> &'static HashMap<String, String> {
        static EN: OnceLock<HashMap<String, String>> = OnceLock::new();
        static ZH: OnceLock<HashMap<String, String>> = OnceLock::new();
        match self {
            Locale::En => EN.get_or_init(|| parse_table(include_str!("../locales/en.json"))),
            Locale::Zh => ZH.get_or_init(|| parse_table(include_str!("../locales/zh.json"))),
        }
    }
}

fn parse_table(raw: &str) -> HashMap<String, String> {
    match serde_json::from_str(raw) {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("malformed bundled locale table: {}", e);
            HashMap::new()
        }
    }
}

/// Synchronous `translate(key) -> String` service over the bundled tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Look up `key` in the active locale, falling back to English and
    /// finally to the key itself.
    pub fn translate(&self, key: &str) -> String {
        if let Some(text) = self.locale.table().get(key) {
            return text.clone();
        }
        if self.locale != Locale::En {
            if let Some(text) = Locale::En.table().get(key) {
                return text.clone();
            }
        }
        key.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_lookup() {
        let t = Translator::new(Locale::En);
        assert_eq!(t.translate("Cancel"), "Cancel");
        assert_eq!(t.translate("Preferences"), "Preferences");
    }

    #[test]
    fn chinese_lookup() {
        let t = Translator::new(Locale::Zh);
        assert_eq!(t.translate("Cancel"), "取消");
        assert_eq!(t.translate("Volume"), "音量");
    }

    #[test]
    fn unknown_key_falls_back_to_the_key() {
        let t = Translator::new(Locale::Zh);
        assert_eq!(t.translate("no-such-key"), "no-such-key");
    }

    #[test]
    fn every_english_key_has_a_chinese_entry() {
        let missing: Vec<_> = Locale::En
            .table()
            .keys()
            .filter(|k| !Locale::Zh.table().contains_key(*k))
            .collect();
        assert!(missing.is_empty(), "untranslated keys: {:?}", missing);
    }

    #[test]
    fn tag_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_tag(locale.tag()), Some(locale));
        }
        assert_eq!(Locale::from_tag("tlh"), None);
    }
}
