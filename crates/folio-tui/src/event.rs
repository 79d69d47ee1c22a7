//! Terminal event polling

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use folio_app::{InputKey, Message};
use folio_core::prelude::*;
use ratatui::layout::{Position, Rect};

/// Screen regions that navigate to a section when clicked.
///
/// Rebuilt on every frame by the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTargets {
    regions: Vec<(Rect, usize)>,
}

impl ClickTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I: IntoIterator<Item = (Rect, usize)>>(&mut self, regions: I) {
        self.regions.extend(regions);
    }

    /// Section index of the first region containing the cell
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, index)| *index)
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Wheel notches become pixel deltas (positive = down); left clicks hit-test the targets
pub fn mouse_event_to_message(
    mouse: MouseEvent,
    wheel_step: f64,
    targets: &ClickTargets,
) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Message::Wheel { delta: wheel_step }),
        MouseEventKind::ScrollUp => Some(Message::Wheel { delta: -wheel_step }),
        MouseEventKind::Down(MouseButton::Left) => targets
            .hit(mouse.column, mouse.row)
            .map(Message::GoToSection),
        _ => None,
    }
}

/// Map one terminal event to a message
pub fn event_to_message(event: Event, wheel_step: f64, targets: &ClickTargets) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Mouse(mouse) => mouse_event_to_message(mouse, wheel_step, targets),
        Event::Resize(width, height) => Some(Message::Resize { width, height }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll(wheel_step: f64, targets: &ClickTargets) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;
        Ok(event_to_message(event, wheel_step, targets))
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}
