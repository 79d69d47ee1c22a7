//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event to message mapping
//! - `scroll`: Section navigation handlers

pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;


use crate::message::Message;
use crate::scroll::ScrollCommand;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Smoothly scroll the section's page into view
    ScrollIntoView(ScrollCommand),

    /// Let a wheel delta (px) scroll the page natively (mobile)
    NativeScroll { delta: f64 },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Scroll action for a navigation command, if one was produced
    pub fn scroll(command: Option<ScrollCommand>) -> Self {
        match command {
            Some(cmd) => Self::action(UpdateAction::ScrollIntoView(cmd)),
            None => Self::none(),
        }
    }
}
