//! Persisted UI preferences.
//!
//! A single flag, the colour theme, kept in a small JSON file:
//! `{"theme": "dark"}`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::QuizError;

pub const DEFAULT_PREFERENCES_PATH: &str = ".age-quiz.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

/// File-backed preference store.
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    preferences: Preferences,
}

impl PreferenceStore {
    /// Opens the store at `path`. A missing or unreadable file yields defaults.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let preferences = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring malformed preferences");
                Preferences::default()
            }),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no saved preferences");
                Preferences::default()
            }
        };

        Self { path, preferences }
    }

    pub fn theme(&self) -> Theme {
        self.preferences.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), QuizError> {
        self.preferences.theme = theme;
        self.save()
    }

    /// Flips the theme and persists it, returning the new value.
    pub fn toggle_theme(&mut self) -> Result<Theme, QuizError> {
        let theme = self.theme().toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    fn save(&self) -> Result<(), QuizError> {
        let json = serde_json::to_string_pretty(&self.preferences)
            .map_err(|e| QuizError::Preferences(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| QuizError::Preferences(format!("{}: {}", self.path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_light_theme() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::open(dir.path().join("absent.json"));
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn theme_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = PreferenceStore::open(&path);
        assert_eq!(store.toggle_theme().unwrap(), Theme::Dark);

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"dark\""));

        let reopened = PreferenceStore::open(&path);
        assert_eq!(reopened.theme(), Theme::Dark);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(PreferenceStore::open(&path).theme(), Theme::Light);
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = PreferenceStore::open(dir.path().join("missing-dir").join("prefs.json"));

        assert!(matches!(
            store.set_theme(Theme::Dark),
            Err(QuizError::Preferences(_))
        ));
    }
}
