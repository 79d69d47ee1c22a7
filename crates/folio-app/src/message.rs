//! Message types for the application (TEA pattern)

use folio_core::IntersectionEntry;

use crate::input_key::InputKey;
use crate::scroll::NavKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for timers and animations
    Tick,

    /// Force quit (q, Esc, Ctrl+C, signal)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Section Navigation
    // ─────────────────────────────────────────────────────────
    /// One mouse wheel event; positive delta scrolls down (px)
    Wheel { delta: f64 },
    /// Discrete keyboard navigation intent
    Navigate(NavKey),
    /// Explicit request, e.g. a click on an indicator dot or navbar link
    GoToSection(usize),

    // ─────────────────────────────────────────────────────────
    // Host Reports
    // ─────────────────────────────────────────────────────────
    /// Visibility of the sections after the viewport moved
    Intersections(Vec<IntersectionEntry>),
    /// The smooth scroll animation reached its target
    ScrollEnded,
    /// Terminal resized
    Resize { width: u16, height: u16 },

    // ─────────────────────────────────────────────────────────
    // Preferences
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
}
