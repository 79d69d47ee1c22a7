//! folio-tui - Terminal front end for folio
//!
//! Renders the portfolio as a stack of full-height pages with ratatui, maps
//! crossterm input to [`folio_app::Message`]s, animates section scrolls and
//! reports page visibility back to the controller.

pub mod data;
pub mod document;
pub mod event;
pub mod layout;
pub mod process;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use document::{PageDocument, ScrollProgress};
pub use runner::run;
