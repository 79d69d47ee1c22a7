//! # folio-core - Core Domain Types
//!
//! Foundation crate for folio. Provides the section list, theme mode, device
//! classification, viewport visibility maths, the clock abstraction, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, dirs, toml).
//!
//! ## Public API
//!
//! ### Sections (`section`)
//! - [`SectionId`] - Stable string identifier of one full-screen section
//! - [`SectionList`] - Ordered, unique, non-empty list of sections
//!
//! ### Theme (`theme`)
//! - [`ThemeMode`] - Light or dark, persisted as `"light"` / `"dark"`
//!
//! ### Devices (`device`)
//! - [`DeviceClass`] - Desktop (wheel is intercepted) or Mobile (native scroll)
//! - [`DeviceProbe`] - Injectable capability probe
//! - [`TerminalProbe`] - Probe backed by terminal width and touch sniffing
//!
//! ### Visibility (`visibility`)
//! - [`IntersectionEntry`] - Visibility ratio of one section
//! - [`dominant_section()`] - Pick the section occupying most of the viewport
//!
//! ### Time (`clock`)
//! - [`Clock`], [`SystemClock`], [`ManualClock`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod clock;
pub mod device;
pub mod error;
pub mod logging;
pub mod section;
pub mod theme;
pub mod visibility;

/// Prelude for common imports used throughout all folio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use clock::{deadline_after, Clock, ManualClock, SystemClock};
pub use device::{DeviceClass, DeviceProbe, TerminalProbe, Viewport, DEFAULT_COMPACT_WIDTH};
pub use error::{Error, Result, ResultExt};
pub use section::{SectionId, SectionList};
pub use theme::ThemeMode;
pub use visibility::{dominant_section, visibility_ratio, IntersectionEntry};
