//! Light and dark colour schemes.
//!
//! - `palette` — [`Palette`] values per [`ThemeMode`](folio_core::ThemeMode)
//! - `styles` — Semantic style builder functions

pub mod palette;
pub mod styles;

pub use palette::Palette;
