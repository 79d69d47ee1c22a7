//! Application state (Model in TEA pattern)

use std::sync::Arc;
use std::time::{Duration, Instant};

use folio_core::{
    deadline_after, Clock, DeviceClass, DeviceProbe, SectionList, SystemClock, Viewport,
};
use tracing::debug;

use crate::config::Settings;
use crate::scroll::SectionScroller;
use crate::theme::ThemeStore;

/// Sections of the portfolio, in page order
pub const DEFAULT_SECTIONS: [&str; 6] = ["hero", "about", "resume", "projects", "blog", "passions"];

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state.
///
/// Created once at the root by the runner and torn down with
/// [`AppState::shutdown`].
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,
    pub scroller: SectionScroller,
    pub theme: ThemeStore,
    pub viewport: Viewport,

    clock: Arc<dyn Clock>,
    probe: Box<dyn DeviceProbe>,
    hint_until: Option<Instant>,
}

impl AppState {
    pub fn new(
        sections: SectionList,
        settings: Settings,
        theme: ThemeStore,
        probe: Box<dyn DeviceProbe>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let scroller = SectionScroller::new(sections, settings.scroll.timings());
        let hint_for = Duration::from_secs(settings.ui.scroll_hint_secs);
        let hint_until = settings
            .ui
            .show_scroll_hint
            .then(|| deadline_after(clock.now(), hint_for));

        Self {
            phase: AppPhase::Running,
            settings,
            scroller,
            theme,
            viewport: Viewport::default(),
            clock,
            probe,
            hint_until,
        }
    }

    /// State on the wall clock
    pub fn with_system_clock(
        sections: SectionList,
        settings: Settings,
        theme: ThemeStore,
        probe: Box<dyn DeviceProbe>,
    ) -> Self {
        Self::new(sections, settings, theme, probe, Arc::new(SystemClock))
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn current_section(&self) -> usize {
        self.scroller.current_section()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroller.is_scrolling()
    }

    pub fn is_mobile(&self) -> bool {
        self.scroller.is_mobile()
    }

    /// Record the new terminal size and re-classify the device
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        let class = self.probe.classify(viewport);
        if class != self.scroller.device_class() {
            debug!(
                "Viewport {}x{} classified as {:?}",
                viewport.width, viewport.height, class
            );
        }
        self.scroller.set_device_class(class);
    }

    pub fn device_class(&self) -> DeviceClass {
        self.scroller.device_class()
    }

    /// The "scroll to navigate" hint shows on the first section, on desktop,
    /// until it times out.
    pub fn scroll_hint_visible(&self) -> bool {
        match self.hint_until {
            Some(until) => {
                self.current_section() == 0 && !self.is_mobile() && self.now() < until
            }
            None => false,
        }
    }

    /// Earliest instant at which a timer needs servicing
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scroller.next_deadline()
    }

    /// Stop all timers; later input has no effect on the controller.
    pub fn shutdown(&mut self) {
        self.scroller.teardown();
        self.hint_until = None;
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("phase", &self.phase)
            .field("scroller", &self.scroller)
            .field("theme", &self.theme)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
