//! Device classification
//!
//! Decides whether wheel input is intercepted for section snapping (desktop)
//! or left to native scrolling (mobile). The probe is a trait so the
//! environment sniffing can be swapped out in tests.

/// Width below which a touch-primary terminal counts as a small screen
pub const DEFAULT_COMPACT_WIDTH: u16 = 80;

/// Size of the visible area in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Input class of the host device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    /// Wheel and keyboard drive section snapping
    #[default]
    Desktop,
    /// Small touch-primary screen; scrolling stays native
    Mobile,
}

impl DeviceClass {
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

/// Capability probe returning the device class for a viewport
pub trait DeviceProbe: Send + Sync {
    fn classify(&self, viewport: Viewport) -> DeviceClass;
}

/// Probe for terminal hosts.
///
/// Desktop is NOT (touch-primary AND narrower than `compact_width`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalProbe {
    pub touch_primary: bool,
    pub compact_width: u16,
}

impl TerminalProbe {
    pub fn new(touch_primary: bool, compact_width: u16) -> Self {
        Self {
            touch_primary,
            compact_width,
        }
    }

    /// Probe whose touch capability is sniffed from the process environment
    pub fn from_env(compact_width: u16) -> Self {
        Self::new(sniff_touch(), compact_width)
    }
}

impl Default for TerminalProbe {
    fn default() -> Self {
        Self::new(false, DEFAULT_COMPACT_WIDTH)
    }
}

impl DeviceProbe for TerminalProbe {
    fn classify(&self, viewport: Viewport) -> DeviceClass {
        if self.touch_primary && viewport.width < self.compact_width {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

/// Detect a touch-primary terminal from the process environment.
pub fn sniff_touch() -> bool {
    sniff_touch_with(|key| std::env::var(key).ok())
}

/// Detect a touch-primary terminal using the given variable lookup.
///
/// `FOLIO_TOUCH` wins when set; otherwise Termux (Android) is treated as touch.
pub fn sniff_touch_with<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("FOLIO_TOUCH") {
        return matches!(value.trim(), "1" | "true" | "yes");
    }

    lookup("TERMUX_VERSION").is_some()
}
