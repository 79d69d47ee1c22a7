//! Message processing and action dispatch
//!
//! Runs messages through the TEA update function, applies the resulting
//! actions to the [`PageDocument`], and feeds the document's animation
//! progress back as host reports.

use folio_app::{update, AppState, Message, UpdateAction};
use ratatui::layout::Rect;
use tracing::debug;

use crate::document::{PageDocument, ScrollProgress};
use crate::layout;

/// Rows scrolled per wheel notch when scrolling natively
const ROWS_PER_NOTCH: f64 = 3.0;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, document: &mut PageDocument, message: Message) {
    // Pages are exactly as tall as the viewport area left by the layout
    if let Message::Resize { width, height } = message {
        let areas = layout::create(Rect::new(0, 0, width, height));
        document.set_page_height(areas.pages.height);
    }

    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);

        if let Some(action) = result.action {
            handle_action(state, document, action);
        }

        // Continue with follow-up message
        msg = result.message;
    }
}

/// Apply an action to the page document
pub fn handle_action(state: &AppState, document: &mut PageDocument, action: UpdateAction) {
    match action {
        UpdateAction::ScrollIntoView(command) => {
            if !document.scroll_into_view(&command.id) {
                debug!(
                    "No page mounted for section {} ({}), index updated without scrolling",
                    command.index, command.id
                );
            }
        }
        UpdateAction::NativeScroll { delta } => {
            document.scroll_by(native_scroll_rows(delta, state.settings.scroll.wheel_step));
        }
    }
}

/// Advance the scroll animation one frame and report what the viewport shows
pub fn animate(state: &mut AppState, document: &mut PageDocument) {
    let progress = document.tick();

    if document.take_moved() {
        let entries = document.intersections(state.scroller.sections());
        process_message(state, document, Message::Intersections(entries));
    }

    if progress == ScrollProgress::Arrived {
        process_message(state, document, Message::ScrollEnded);
    }
}

fn native_scroll_rows(delta: f64, wheel_step: f64) -> i32 {
    let notches = if wheel_step > 0.0 {
        delta / wheel_step
    } else {
        delta.signum()
    };
    (notches * ROWS_PER_NOTCH).round() as i32
}
