//! Main update function - handles state transitions (TEA pattern)

use folio_core::Viewport;
use tracing::info;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, scroll, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    if state.should_quit() {
        return UpdateResult::none();
    }

    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            state.shutdown();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => scroll::handle_tick(state),

        // ─────────────────────────────────────────────────────────
        // Section Navigation
        // ─────────────────────────────────────────────────────────
        Message::Wheel { delta } => scroll::handle_wheel(state, delta),
        Message::Navigate(key) => scroll::handle_navigate(state, key),
        Message::GoToSection(index) => scroll::handle_go_to_section(state, index),

        // ─────────────────────────────────────────────────────────
        // Host Reports
        // ─────────────────────────────────────────────────────────
        Message::Intersections(entries) => scroll::handle_intersections(state, &entries),
        Message::ScrollEnded => scroll::handle_scroll_ended(state),
        Message::Resize { width, height } => {
            state.resize(Viewport::new(width, height));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Preferences
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            let mode = state.theme.toggle();
            info!("Theme toggled to {}", mode);
            UpdateResult::none()
        }
    }
}
