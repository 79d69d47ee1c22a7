//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::scroll::NavKey;
use crate::state::AppState;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Section navigation
        InputKey::Down | InputKey::PageDown | InputKey::Char('j') => {
            Some(Message::Navigate(NavKey::Next))
        }
        InputKey::Up | InputKey::PageUp | InputKey::Char('k') => {
            Some(Message::Navigate(NavKey::Previous))
        }
        InputKey::Home | InputKey::Char('g') => Some(Message::Navigate(NavKey::First)),
        InputKey::End | InputKey::Char('G') => Some(Message::Navigate(NavKey::Last)),

        // Direct jump: '1' is the first section
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            state
                .scroller
                .sections()
                .contains_index(index)
                .then_some(Message::GoToSection(index))
        }

        // Theme
        InputKey::Char('t') => Some(Message::ToggleTheme),

        _ => None,
    }
}
