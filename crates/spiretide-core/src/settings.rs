//! Persisted UI preferences.
//!
//! Saved as `settings.json` in the data directory. Missing file means
//! defaults; a corrupt file is an error the caller decides how to handle
//! (the desktop binary logs it and starts from defaults).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::i18n::Locale;

const SETTINGS_FILE: &str = "settings.json";

/// Preferences that survive between sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    /// Master volume, 0-100.
    pub volume: u8,
    pub show_tooltips: bool,
    /// When set, the portrait-window warning stays quiet.
    pub suppress_rotate_warning: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            volume: 70,
            show_tooltips: true,
            suppress_rotate_warning: false,
        }
    }
}

impl Settings {
    /// Load settings from `data_dir`, defaulting when no file exists yet.
    pub fn load(data_dir: &Path) -> Result<Settings, SettingsError> {
        let path = data_dir.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(Settings::default());
        }
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write settings to `data_dir`, creating the directory if needed.
    pub fn save(&self, data_dir: &Path) -> Result<(), SettingsError> {
        fs::create_dir_all(data_dir)?;
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(data_dir.join(SETTINGS_FILE), raw)?;
        tracing::debug!(dir = %data_dir.display(), "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let settings = Settings {
            locale: Locale::Zh,
            volume: 15,
            show_tooltips: false,
            suppress_rotate_warning: true,
        };
        settings.save(dir.path()).unwrap();
        assert_eq!(Settings::load(dir.path()).unwrap(), settings);
    }

    #[test]
    fn save_creates_the_data_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("deeper").join("still");
        Settings::default().save(&nested).unwrap();
        assert!(nested.join(SETTINGS_FILE).exists());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "not json").unwrap();
        assert!(matches!(
            Settings::load(dir.path()),
            Err(SettingsError::Serialization(_))
        ));
    }

    #[test]
    fn unknown_fields_do_not_break_loading() {
        // Older builds may have written extra keys.
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "locale": "zh", "volume": 30, "retired_option": true }"#,
        )
        .unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.locale, Locale::Zh);
        assert_eq!(settings.volume, 30);
        assert!(settings.show_tooltips);
    }
}
