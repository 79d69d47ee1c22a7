//! Section scroll controller
//!
//! Owns the active section index and mediates between three input streams:
//! - wheel deltas (desktop only), accumulated into debounced gestures
//! - keyboard navigation, one discrete step per accepted key
//! - passive intersection reports from the host's viewport
//!
//! Navigation produces a [`ScrollCommand`] that the host turns into a smooth
//! scroll. While that scroll is in flight the [`Suspension`] state machine
//! blocks further wheel/keyboard navigation and mutes passive detection, so
//! the animation cannot feed back into the index.
//!
//! The controller is pure: every time-dependent call takes `now` and the host
//! drives expired deadlines through [`SectionScroller::tick`].

pub mod gesture;
pub mod suspension;
pub mod timings;


use std::time::Instant;

use folio_core::{dominant_section, DeviceClass, IntersectionEntry, SectionId, SectionList};
use tracing::{debug, trace};

pub use gesture::WheelGesture;
pub use suspension::Suspension;
pub use timings::ScrollTimings;

/// Request for the host to bring a section into view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollCommand {
    pub index: usize,
    pub id: SectionId,
}

/// What the host should do with the native effect of a wheel event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelDisposition {
    /// The controller consumed the event; suppress native scrolling
    Captured,
    /// Let the event scroll natively (mobile, or controller torn down)
    Passthrough,
}

/// Discrete keyboard navigation intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// ArrowDown / PageDown
    Next,
    /// ArrowUp / PageUp
    Previous,
    /// Home
    First,
    /// End
    Last,
}

#[derive(Debug, Clone)]
pub struct SectionScroller {
    sections: SectionList,
    current: usize,
    suspension: Suspension,
    gesture: WheelGesture,
    device: DeviceClass,
    timings: ScrollTimings,
    detached: bool,
}

impl SectionScroller {
    pub fn new(sections: SectionList, timings: ScrollTimings) -> Self {
        Self {
            sections,
            current: 0,
            suspension: Suspension::Idle,
            gesture: WheelGesture::new(),
            device: DeviceClass::Desktop,
            timings,
            detached: false,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Readers
    // ─────────────────────────────────────────────────────────

    pub fn current_section(&self) -> usize {
        self.current
    }

    pub fn current_id(&self) -> Option<&SectionId> {
        self.sections.get(self.current)
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    /// True while a programmatic scroll blocks wheel/keyboard navigation
    pub fn is_scrolling(&self) -> bool {
        self.suspension.navigation_in_flight()
    }

    pub fn is_mobile(&self) -> bool {
        self.device.is_mobile()
    }

    pub fn device_class(&self) -> DeviceClass {
        self.device
    }

    pub fn suspension(&self) -> Suspension {
        self.suspension
    }

    pub fn timings(&self) -> &ScrollTimings {
        &self.timings
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Earliest pending deadline (suspension window or wheel gesture)
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.suspension.next_deadline(), self.gesture.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    /// Navigate to `index`.
    ///
    /// Out-of-range indices are ignored. The index is updated immediately,
    /// before the host scrolls, and explicit requests are never blocked by
    /// suspension, so the last call always wins.
    pub fn go_to_section(&mut self, index: usize, now: Instant) -> Option<ScrollCommand> {
        if self.detached {
            return None;
        }

        let Some(id) = self.sections.get(index).cloned() else {
            debug!(
                "Ignoring navigation to section {} (have {})",
                index,
                self.sections.len()
            );
            return None;
        };

        debug!("Navigating {} -> {} ({})", self.current, index, id);
        self.current = index;
        self.gesture.cancel();
        self.suspension = Suspension::begin(
            now,
            self.timings.navigation_lock,
            self.timings.observer_suppress,
        );

        Some(ScrollCommand { index, id })
    }

    /// Feed one wheel event. Positive `delta` scrolls forward (down).
    pub fn on_wheel(&mut self, delta: f64, now: Instant) -> WheelDisposition {
        if self.detached || self.device.is_mobile() {
            return WheelDisposition::Passthrough;
        }

        self.gesture.push(delta, now, self.timings.wheel_debounce);
        trace!(
            "Wheel delta {:+} (gesture sum {:+})",
            delta,
            self.gesture.sum()
        );
        WheelDisposition::Captured
    }

    /// Handle a keyboard navigation intent.
    ///
    /// Ignored entirely while a navigation is in flight.
    pub fn on_key(&mut self, key: NavKey, now: Instant) -> Option<ScrollCommand> {
        if self.detached {
            return None;
        }

        self.suspension = self.suspension.advance(now);
        if self.suspension.navigation_in_flight() {
            trace!("Ignoring {:?} while navigating", key);
            return None;
        }

        let last = self.sections.last_index();
        let target = match key {
            NavKey::Next if self.current < last => self.current + 1,
            NavKey::Previous if self.current > 0 => self.current - 1,
            NavKey::First => 0,
            NavKey::Last => last,
            _ => return None,
        };

        self.go_to_section(target, now)
    }

    /// Fire every deadline that has passed at `now`.
    ///
    /// Suspension transitions are applied first, then a due wheel gesture is
    /// evaluated. Returns a command when the gesture committed a navigation.
    pub fn tick(&mut self, now: Instant) -> Option<ScrollCommand> {
        if self.detached {
            return None;
        }

        self.suspension = self.suspension.advance(now);

        let sum = self.gesture.take_due(now)?;
        self.resolve_gesture(sum, now)
    }

    /// At most one step per settled gesture, whatever its magnitude.
    fn resolve_gesture(&mut self, sum: f64, now: Instant) -> Option<ScrollCommand> {
        if self.suspension.navigation_in_flight() {
            trace!("Discarding wheel gesture {:+} while navigating", sum);
            return None;
        }

        if sum.abs() <= self.timings.wheel_threshold {
            trace!("Wheel gesture {:+} below threshold", sum);
            return None;
        }

        if sum > 0.0 && self.current < self.sections.last_index() {
            self.go_to_section(self.current + 1, now)
        } else if sum < 0.0 && self.current > 0 {
            self.go_to_section(self.current - 1, now)
        } else {
            None
        }
    }

    // ─────────────────────────────────────────────────────────
    // Passive detection
    // ─────────────────────────────────────────────────────────

    /// Adopt the section dominating the viewport, unless suppressed.
    ///
    /// Returns true when the current index changed.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry], now: Instant) -> bool {
        if self.detached {
            return false;
        }

        self.suspension = self.suspension.advance(now);
        if self.suspension.observer_suppressed() {
            return false;
        }

        let known: Vec<IntersectionEntry> = entries
            .iter()
            .copied()
            .filter(|e| self.sections.contains_index(e.index))
            .collect();

        match dominant_section(&known, self.timings.min_visibility_ratio) {
            Some(index) if index != self.current => {
                debug!("Viewport now shows section {} (was {})", index, self.current);
                self.current = index;
                true
            }
            _ => false,
        }
    }

    /// The host reports that the smooth scroll animation finished.
    pub fn on_scroll_end(&mut self, now: Instant) {
        if self.detached {
            return;
        }

        self.suspension = self
            .suspension
            .advance(now)
            .scroll_ended(now, self.timings.scroll_end_grace);
        trace!("Scroll ended, suspension now {}", self.suspension.label());
    }

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────

    /// Re-classify the device. Switching to mobile drops any pending gesture.
    pub fn set_device_class(&mut self, class: DeviceClass) {
        if class == self.device {
            return;
        }

        debug!("Device class {:?} -> {:?}", self.device, class);
        if class.is_mobile() {
            self.gesture.cancel();
        }
        self.device = class;
    }

    /// Cancel every pending timer and stop reacting to input.
    pub fn teardown(&mut self) {
        self.gesture.cancel();
        self.suspension = Suspension::Idle;
        self.detached = true;
        debug!("Section scroller torn down at section {}", self.current);
    }
}
