//! folio-app - Application state and orchestration for folio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the section scroll controller, the theme preference store and
//! configuration loading. It has no terminal dependencies.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod scroll;
pub mod state;
pub mod theme;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use scroll::{NavKey, ScrollCommand, ScrollTimings, SectionScroller, WheelDisposition};
pub use state::{AppPhase, AppState, DEFAULT_SECTIONS};
pub use theme::{FileStorage, MemoryStorage, PreferenceStorage, ThemeStore};
