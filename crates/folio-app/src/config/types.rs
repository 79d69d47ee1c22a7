//! Configuration types

use std::time::Duration;

use folio_core::{ThemeMode, DEFAULT_COMPACT_WIDTH};
use serde::{Deserialize, Serialize};

use crate::scroll::timings::{
    ScrollTimings, DEFAULT_MIN_VISIBILITY_RATIO, DEFAULT_NAVIGATION_LOCK_MS,
    DEFAULT_OBSERVER_SUPPRESS_MS, DEFAULT_SCROLL_END_GRACE_MS, DEFAULT_WHEEL_DEBOUNCE_MS,
    DEFAULT_WHEEL_THRESHOLD,
};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub scroll: ScrollSettings,

    #[serde(default)]
    pub device: DeviceSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Section scroll controller tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScrollSettings {
    /// Wheel events closer together than this form one gesture
    #[serde(default = "default_wheel_debounce_ms")]
    pub wheel_debounce_ms: u64,

    /// Minimum accumulated delta (px) for a gesture to navigate
    #[serde(default = "default_wheel_threshold")]
    pub wheel_threshold: f64,

    /// Pixels reported per mouse wheel notch
    #[serde(default = "default_wheel_step")]
    pub wheel_step: f64,

    /// Wheel/keyboard navigation is blocked this long after a scroll starts
    #[serde(default = "default_navigation_lock_ms")]
    pub navigation_lock_ms: u64,

    /// Passive detection is muted this long after a scroll starts
    #[serde(default = "default_observer_suppress_ms")]
    pub observer_suppress_ms: u64,

    /// Release the navigation lock as soon as the scroll animation arrives
    #[serde(default = "default_true")]
    pub scroll_end_events: bool,

    /// Observer suppression kept after a reported scroll end
    #[serde(default = "default_scroll_end_grace_ms")]
    pub scroll_end_grace_ms: u64,

    /// Minimum visible share for passive detection (0.0 - 1.0)
    #[serde(default = "default_min_visibility_ratio")]
    pub min_visibility_ratio: f64,

    /// Smooth scroll speed, share of the remaining distance per frame
    #[serde(default = "default_animation_speed")]
    pub animation_speed: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            wheel_debounce_ms: default_wheel_debounce_ms(),
            wheel_threshold: default_wheel_threshold(),
            wheel_step: default_wheel_step(),
            navigation_lock_ms: default_navigation_lock_ms(),
            observer_suppress_ms: default_observer_suppress_ms(),
            scroll_end_events: true,
            scroll_end_grace_ms: default_scroll_end_grace_ms(),
            min_visibility_ratio: default_min_visibility_ratio(),
            animation_speed: default_animation_speed(),
        }
    }
}

impl ScrollSettings {
    /// Controller timings, with out-of-range values clamped
    pub fn timings(&self) -> ScrollTimings {
        ScrollTimings {
            wheel_debounce: Duration::from_millis(self.wheel_debounce_ms),
            wheel_threshold: self.wheel_threshold.max(0.0),
            navigation_lock: Duration::from_millis(self.navigation_lock_ms),
            observer_suppress: Duration::from_millis(self.observer_suppress_ms),
            scroll_end_grace: Duration::from_millis(self.scroll_end_grace_ms),
            min_visibility_ratio: self.min_visibility_ratio.clamp(0.0, 1.0),
        }
    }
}

fn default_wheel_debounce_ms() -> u64 {
    DEFAULT_WHEEL_DEBOUNCE_MS
}

fn default_wheel_threshold() -> f64 {
    DEFAULT_WHEEL_THRESHOLD
}

fn default_wheel_step() -> f64 {
    40.0
}

fn default_navigation_lock_ms() -> u64 {
    DEFAULT_NAVIGATION_LOCK_MS
}

fn default_observer_suppress_ms() -> u64 {
    DEFAULT_OBSERVER_SUPPRESS_MS
}

fn default_scroll_end_grace_ms() -> u64 {
    DEFAULT_SCROLL_END_GRACE_MS
}

fn default_min_visibility_ratio() -> f64 {
    DEFAULT_MIN_VISIBILITY_RATIO
}

fn default_animation_speed() -> f64 {
    0.35
}

fn default_true() -> bool {
    true
}

/// Device classification settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeviceSettings {
    /// Force touch-primary mode. When unset, the environment is sniffed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub touch: Option<bool>,

    /// Terminals narrower than this count as small screens
    #[serde(default = "default_compact_width")]
    pub compact_width: u16,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            touch: None,
            compact_width: default_compact_width(),
        }
    }
}

fn default_compact_width() -> u16 {
    DEFAULT_COMPACT_WIDTH
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Name shown in the navbar and hero page
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Show the "scroll to navigate" hint on the first section (desktop only)
    #[serde(default = "default_true")]
    pub show_scroll_hint: bool,

    /// Seconds before the hint hides itself
    #[serde(default = "default_scroll_hint_secs")]
    pub scroll_hint_secs: u64,

    /// Theme used when no preference is stored yet, instead of the system one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            show_scroll_hint: true,
            scroll_hint_secs: default_scroll_hint_secs(),
            theme: None,
        }
    }
}

fn default_owner() -> String {
    "folio".to_string()
}

fn default_scroll_hint_secs() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings.scroll.wheel_debounce_ms, 150);
        assert_eq!(settings.scroll.navigation_lock_ms, 1000);
        assert_eq!(settings.scroll.observer_suppress_ms, 1500);
        assert!(settings.scroll.scroll_end_events);
        assert_eq!(settings.device.touch, None);
        assert!(settings.ui.show_scroll_hint);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [scroll]
            navigation_lock_ms = 600

            [ui]
            theme = "dark"
            "#,
        )
        .unwrap();

        assert_eq!(settings.scroll.navigation_lock_ms, 600);
        assert_eq!(settings.scroll.wheel_threshold, 10.0);
        assert_eq!(settings.ui.theme, Some(ThemeMode::Dark));
        assert_eq!(settings.ui.scroll_hint_secs, 5);
    }

    #[test]
    fn test_timings_conversion() {
        let settings = ScrollSettings::default();
        let timings = settings.timings();
        assert_eq!(timings, ScrollTimings::default());
    }

    #[test]
    fn test_timings_clamp_ratio() {
        let settings = ScrollSettings {
            min_visibility_ratio: 4.0,
            wheel_threshold: -3.0,
            ..Default::default()
        };
        let timings = settings.timings();
        assert_eq!(timings.min_visibility_ratio, 1.0);
        assert_eq!(timings.wheel_threshold, 0.0);
    }
}
