//! Theme preference store
//!
//! Holds the current [`ThemeMode`] and persists it under a single key in a
//! [`PreferenceStorage`] slot. On load the stored value wins; with nothing
//! (or garbage) stored, the system preference decides.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use folio_core::prelude::*;
use folio_core::ThemeMode;

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

const PREFERENCES_FILENAME: &str = "preferences.toml";

/// Key-value slot for persisted preferences
pub trait PreferenceStorage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage, used by tests and when no config dir exists
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat TOML table on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open `<dir>/preferences.toml`. A missing or unreadable file starts empty.
    pub fn open(dir: &Path) -> Self {
        let path = dir.join(PREFERENCES_FILENAME);
        let values = read_preferences(&path).unwrap_or_default();
        Self { path, values }
    }

    /// Open the preferences file in the user's config directory
    pub fn open_default() -> Option<Self> {
        crate::config::config_dir().map(|dir| Self::open(&dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir).map_err(|e| {
                Error::preferences(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let content = toml::to_string_pretty(&self.values)?;
        let temp_path = self.path.with_extension("toml.tmp");

        // Atomic write: write to temp, then rename
        std::fs::write(&temp_path, content)
            .map_err(|e| Error::preferences(format!("Failed to write temp file: {}", e)))?;
        std::fs::rename(&temp_path, &self.path)
            .map_err(|e| Error::preferences(format!("Failed to rename temp file: {}", e)))?;

        debug!("Saved preferences to {:?}", self.path);
        Ok(())
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.write()
    }
}

fn read_preferences(path: &Path) -> Option<BTreeMap<String, String>> {
    if !path.exists() {
        debug!("No preferences file at {:?}", path);
        return None;
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(values) => Some(values),
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            None
        }
    }
}

/// Guess whether the terminal background is dark.
pub fn system_prefers_dark() -> bool {
    system_prefers_dark_with(|key| std::env::var(key).ok())
}

/// `COLORFGBG` is `"<fg>;<bg>"` (sometimes with a middle field); a background
/// of 0-6 or 8 is one of the dark ANSI colours. Defaults to light.
pub fn system_prefers_dark_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup("COLORFGBG")
        .and_then(|value| {
            value
                .rsplit(';')
                .next()
                .and_then(|bg| bg.trim().parse::<u8>().ok())
        })
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}

/// Owned theme state with its persistence slot
pub struct ThemeStore {
    mode: ThemeMode,
    storage: Box<dyn PreferenceStorage>,
}

impl ThemeStore {
    /// Read the stored preference once; fall back to the system preference.
    pub fn load(storage: Box<dyn PreferenceStorage>, system_prefers_dark: bool) -> Self {
        Self::load_or(storage, ThemeMode::from_dark(system_prefers_dark))
    }

    /// Read the stored preference once; fall back to `fallback` without storing it.
    pub fn load_or(storage: Box<dyn PreferenceStorage>, fallback: ThemeMode) -> Self {
        let stored = storage.get(THEME_KEY);
        let mode = match stored.as_deref().map(str::parse::<ThemeMode>) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                warn!("Ignoring stored theme: {}", e);
                fallback
            }
            None => fallback,
        };

        info!("Theme: {}", mode);
        Self { mode, storage }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flip the theme and persist it. A failed write keeps the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.toggled());
        self.mode
    }

    /// Set and persist an explicit mode
    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        if let Err(e) = self.storage.set(THEME_KEY, mode.as_str()) {
            warn!("Failed to persist theme: {}", e);
        }
    }

    pub fn stored_value(&self) -> Option<String> {
        self.storage.get(THEME_KEY)
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_uses_stored_value() {
        let store = ThemeStore::load(Box::new(MemoryStorage::with_value(THEME_KEY, "dark")), false);
        assert_eq!(store.mode(), ThemeMode::Dark);

        let store = ThemeStore::load(Box::new(MemoryStorage::with_value(THEME_KEY, "light")), true);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_load_without_stored_value_follows_system() {
        let store = ThemeStore::load(Box::new(MemoryStorage::new()), true);
        assert_eq!(store.mode(), ThemeMode::Dark);

        let store = ThemeStore::load(Box::new(MemoryStorage::new()), false);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_load_with_garbage_follows_system() {
        let storage = MemoryStorage::with_value(THEME_KEY, "purple");
        let store = ThemeStore::load(Box::new(storage), true);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_load_or_prefers_stored_value() {
        let storage = MemoryStorage::with_value(THEME_KEY, "light");
        let store = ThemeStore::load_or(Box::new(storage), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_load_or_fallback_is_not_persisted() {
        let store = ThemeStore::load_or(Box::new(MemoryStorage::new()), ThemeMode::Dark);
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(store.stored_value(), None);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = ThemeStore::load(Box::new(MemoryStorage::new()), false);
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.stored_value().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_twice_restores_persisted_value() {
        let storage = MemoryStorage::with_value(THEME_KEY, "light");
        let mut store = ThemeStore::load(Box::new(storage), true);
        store.toggle();
        store.toggle();
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(store.stored_value().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_round_trips_across_opens() {
        let dir = TempDir::new().unwrap();

        let mut store = ThemeStore::load(Box::new(FileStorage::open(dir.path())), false);
        store.toggle();

        let reopened = ThemeStore::load(Box::new(FileStorage::open(dir.path())), false);
        assert_eq!(reopened.mode(), ThemeMode::Dark);
        assert!(dir.path().join("preferences.toml").exists());
        assert!(!dir.path().join("preferences.toml.tmp").exists());
    }

    #[test]
    fn test_file_storage_ignores_corrupt_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("preferences.toml"), "theme = [[[").unwrap();

        let storage = FileStorage::open(dir.path());
        assert_eq!(storage.get(THEME_KEY), None);
    }

    #[test]
    fn test_file_storage_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("folio");

        let mut storage = FileStorage::open(&nested);
        storage.set(THEME_KEY, "dark").unwrap();

        assert!(nested.join("preferences.toml").exists());
    }

    #[test]
    fn test_system_prefers_dark_from_colorfgbg() {
        let lookup =
            |value: &'static str| move |key: &str| (key == "COLORFGBG").then(|| value.to_string());

        assert!(system_prefers_dark_with(lookup("15;0")));
        assert!(system_prefers_dark_with(lookup("15;default;8")));
        assert!(!system_prefers_dark_with(lookup("0;15")));
        assert!(!system_prefers_dark_with(lookup("garbage")));
        assert!(!system_prefers_dark_with(|_| None));
    }
}
