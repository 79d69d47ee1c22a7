//! Tunable constants of the section scroll controller

use std::time::Duration;

/// Debounce window that groups wheel events into one gesture
pub const DEFAULT_WHEEL_DEBOUNCE_MS: u64 = 150;
/// Minimum accumulated wheel delta (device-independent px) that counts as intent
pub const DEFAULT_WHEEL_THRESHOLD: f64 = 10.0;
/// How long wheel/keyboard navigation stays blocked after a scroll starts
pub const DEFAULT_NAVIGATION_LOCK_MS: u64 = 1000;
/// How long passive detection stays blocked after a scroll starts
pub const DEFAULT_OBSERVER_SUPPRESS_MS: u64 = 1500;
/// Observer suppression kept after the host reports the scroll finished
pub const DEFAULT_SCROLL_END_GRACE_MS: u64 = 100;
/// Minimum share of a section that must be visible for passive detection
pub const DEFAULT_MIN_VISIBILITY_RATIO: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTimings {
    pub wheel_debounce: Duration,
    pub wheel_threshold: f64,
    pub navigation_lock: Duration,
    pub observer_suppress: Duration,
    pub scroll_end_grace: Duration,
    pub min_visibility_ratio: f64,
}

impl Default for ScrollTimings {
    fn default() -> Self {
        Self {
            wheel_debounce: Duration::from_millis(DEFAULT_WHEEL_DEBOUNCE_MS),
            wheel_threshold: DEFAULT_WHEEL_THRESHOLD,
            navigation_lock: Duration::from_millis(DEFAULT_NAVIGATION_LOCK_MS),
            observer_suppress: Duration::from_millis(DEFAULT_OBSERVER_SUPPRESS_MS),
            scroll_end_grace: Duration::from_millis(DEFAULT_SCROLL_END_GRACE_MS),
            min_visibility_ratio: DEFAULT_MIN_VISIBILITY_RATIO,
        }
    }
}
