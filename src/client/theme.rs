//! Theme preference
//!
//! The current theme lives in [`ThemeToggle`]; persistence goes through the
//! [`PreferenceStore`] get/set capability so the toggle can run against memory
//! or a TOML file.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::logger;

/// Key the theme is persisted under
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Unknown or empty values fall back to dark
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Icon shown on the toggle button
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-moon",
            Self::Light => "fas fa-sun",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key-value persistence, last write wins
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), String>;
}

/// Store kept only for the lifetime of the process
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat TOML table on disk
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store; a missing or unreadable file starts empty
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = Self::load(&path).unwrap_or_default();
        Self { path, values }
    }

    fn load(path: &Path) -> Option<BTreeMap<String, String>> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(values) => Some(values),
                Err(e) => {
                    logger::log_warning(&format!(
                        "Failed to parse preference file {}: {e}",
                        path.display()
                    ));
                    None
                }
            },
            Err(e) => {
                logger::log_warning(&format!(
                    "Failed to read preference file {}: {e}",
                    path.display()
                ));
                None
            }
        }
    }

    fn save(&self) -> Result<(), String> {
        let content = toml::to_string_pretty(&self.values)
            .map_err(|e| format!("Failed to serialize preferences: {e}"))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create preference directory: {e}"))?;
            }
        }
        fs::write(&self.path, content).map_err(|e| format!("Failed to write preference file: {e}"))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// Theme toggle control
#[derive(Debug)]
pub struct ThemeToggle<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeToggle<S> {
    /// Apply the saved preference, dark when none is saved
    pub fn load(store: S) -> Self {
        let theme = store
            .get(THEME_KEY)
            .map_or(Theme::Dark, |v| Theme::parse(&v));
        Self { store, theme }
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn icon_class(&self) -> &'static str {
        self.theme.icon_class()
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Flip the theme and persist it
    ///
    /// A failed write is logged; the displayed theme still changes.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.theme.as_str()) {
            logger::log_warning(&format!("Theme preference not saved: {e}"));
        }
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let toggle = ThemeToggle::load(MemoryStore::default());
        assert_eq!(toggle.theme(), Theme::Dark);
        assert_eq!(toggle.icon_class(), "fas fa-moon");
    }

    #[test]
    fn test_saved_preference_applied() {
        let mut store = MemoryStore::default();
        store.set(THEME_KEY, "light").unwrap();
        let toggle = ThemeToggle::load(store);
        assert_eq!(toggle.theme(), Theme::Light);
        assert_eq!(toggle.icon_class(), "fas fa-sun");
    }

    #[test]
    fn test_toggle_twice_restores_and_persists() {
        for start in [Theme::Dark, Theme::Light] {
            let mut store = MemoryStore::default();
            store.set(THEME_KEY, start.as_str()).unwrap();
            let mut toggle = ThemeToggle::load(store);

            assert_eq!(toggle.toggle(), start.toggled());
            assert_eq!(
                toggle.store().get(THEME_KEY).as_deref(),
                Some(start.toggled().as_str())
            );

            assert_eq!(toggle.toggle(), start);
            assert_eq!(toggle.store().get(THEME_KEY).as_deref(), Some(start.as_str()));
        }
    }

    #[test]
    fn test_unknown_value_treated_as_dark() {
        assert_eq!(Theme::parse("solarized"), Theme::Dark);
        assert_eq!(Theme::parse(""), Theme::Dark);
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("gated_site_theme_{}", std::process::id()));
        let path = dir.join("prefs.toml");

        let mut toggle = ThemeToggle::load(FileStore::open(&path));
        toggle.toggle();
        assert_eq!(toggle.theme(), Theme::Light);

        let reopened = ThemeToggle::load(FileStore::open(&path));
        assert_eq!(reopened.theme(), Theme::Light);

        let _ = fs::remove_dir_all(dir);
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), String> {
            Err("read-only".to_string())
        }
    }

    #[test]
    fn test_failed_write_still_toggles() {
        let mut toggle = ThemeToggle::load(FailingStore);
        assert_eq!(toggle.toggle(), Theme::Light);
    }
}
