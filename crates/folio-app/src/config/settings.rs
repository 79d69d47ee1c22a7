//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use folio_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
const FOLIO_DIR: &str = "folio";

/// Per-user configuration directory (`~/.config/folio` on Linux)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(FOLIO_DIR))
}

/// Default location of `config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILENAME))
}

/// Load settings from `path`, falling back to defaults.
///
/// A missing file is normal; a broken one is logged and ignored.
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Load settings from the default location
pub fn load_default_settings() -> Settings {
    match default_config_path() {
        Some(path) => load_settings(&path),
        None => {
            debug!("No config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

/// Write a commented default config file at `path` if none exists.
///
/// Returns true when a file was created.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {}: {}", dir.display(), e)))?;
    }

    let content = toml::to_string_pretty(&Settings::default())
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    std::fs::write(path, format!("{}{}", generate_config_header(), content))
        .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))?;

    info!("Created default config at {:?}", path);
    Ok(true)
}

fn generate_config_header() -> String {
    r#"# folio configuration
#
# [scroll]   wheel debounce, navigation lock and observer suppression (ms)
# [device]   set `touch = true` to leave scrolling native on narrow terminals
# [ui]       owner name, scroll hint, default theme ("light" / "dark")

"#
    .to_string()
}
