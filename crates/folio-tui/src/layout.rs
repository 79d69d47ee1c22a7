//! Screen layout definitions for the TUI
//!
//! Navbar on top, footer at the bottom, the page viewport in between with
//! the section indicator docked to its right edge.

use ratatui::layout::{Constraint, Layout, Rect};

const NAVBAR_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
const INDICATOR_WIDTH: u16 = 3;

/// Narrower bodies drop the indicator column
const MIN_WIDTH_FOR_INDICATOR: u16 = 24;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub navbar: Rect,

    /// Viewport of the page document; one page is exactly this tall
    pub pages: Rect,

    /// Section indicator column, when wide enough
    pub indicator: Option<Rect>,

    /// Row for the scroll hint, overlaid near the bottom of the pages
    pub hint: Option<Rect>,

    pub footer: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [navbar, body, footer] = Layout::vertical([
        Constraint::Length(NAVBAR_HEIGHT),
        Constraint::Min(1),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    let (pages, indicator) = if body.width >= MIN_WIDTH_FOR_INDICATOR {
        let [pages, indicator] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(INDICATOR_WIDTH)])
                .areas(body);
        (pages, Some(indicator))
    } else {
        (body, None)
    };

    let hint = (pages.height >= 6).then(|| Rect {
        x: pages.x,
        y: pages.bottom().saturating_sub(2),
        width: pages.width,
        height: 1,
    });

    ScreenAreas {
        navbar,
        pages,
        indicator,
        hint,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_standard_terminal() {
        let areas = create(Rect::new(0, 0, 80, 24));

        assert_eq!(areas.navbar.height, 3);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(areas.footer.y, 23);
        assert_eq!(areas.pages.y, 3);
        assert_eq!(areas.pages.height, 20);
        assert_eq!(areas.pages.width, 77);
        assert_eq!(areas.indicator, Some(Rect::new(77, 3, 3, 20)));
        assert_eq!(areas.hint, Some(Rect::new(0, 21, 77, 1)));
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 40);
        let areas = create(area);
        assert_eq!(
            areas.navbar.height + areas.pages.height + areas.footer.height,
            area.height
        );
    }

    #[test]
    fn test_layout_narrow_drops_indicator() {
        let areas = create(Rect::new(0, 0, 20, 24));
        assert_eq!(areas.indicator, None);
        assert_eq!(areas.pages.width, 20);
    }

    #[test]
    fn test_layout_short_drops_hint() {
        let areas = create(Rect::new(0, 0, 80, 8));
        assert_eq!(areas.pages.height, 4);
        assert_eq!(areas.hint, None);
    }
}
