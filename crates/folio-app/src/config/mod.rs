//! Configuration for folio
//!
//! Supports:
//! - `<config_dir>/folio/config.toml` - Scroll, device and UI settings
//! - `<config_dir>/folio/preferences.toml` - Persisted theme preference (see [`crate::theme`])

pub mod settings;
pub mod types;

pub use settings::{
    config_dir, default_config_path, init_config_file, load_default_settings, load_settings,
    CONFIG_FILENAME,
};
pub use types::*;
