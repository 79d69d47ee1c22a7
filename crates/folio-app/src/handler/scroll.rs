//! Section navigation handlers
//!
//! Thin adapters from messages to the [`SectionScroller`](crate::scroll::SectionScroller),
//! reading the time from the state's clock.

use folio_core::IntersectionEntry;

use crate::scroll::{NavKey, WheelDisposition};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Handle explicit navigation to a section
pub fn handle_go_to_section(state: &mut AppState, index: usize) -> UpdateResult {
    let now = state.now();
    UpdateResult::scroll(state.scroller.go_to_section(index, now))
}

/// Handle a keyboard navigation intent
pub fn handle_navigate(state: &mut AppState, key: NavKey) -> UpdateResult {
    let now = state.now();
    UpdateResult::scroll(state.scroller.on_key(key, now))
}

/// Handle one wheel event
pub fn handle_wheel(state: &mut AppState, delta: f64) -> UpdateResult {
    let now = state.now();
    match state.scroller.on_wheel(delta, now) {
        WheelDisposition::Captured => UpdateResult::none(),
        WheelDisposition::Passthrough => {
            UpdateResult::action(UpdateAction::NativeScroll { delta })
        }
    }
}

/// Handle visibility reports from the host viewport
pub fn handle_intersections(state: &mut AppState, entries: &[IntersectionEntry]) -> UpdateResult {
    let now = state.now();
    state.scroller.on_intersections(entries, now);
    UpdateResult::none()
}

/// Handle the end of a smooth scroll animation
pub fn handle_scroll_ended(state: &mut AppState) -> UpdateResult {
    if state.settings.scroll.scroll_end_events {
        let now = state.now();
        state.scroller.on_scroll_end(now);
    }
    UpdateResult::none()
}

/// Service expired timers (wheel gesture, suspension windows)
pub fn handle_tick(state: &mut AppState) -> UpdateResult {
    let now = state.now();
    UpdateResult::scroll(state.scroller.tick(now))
}
