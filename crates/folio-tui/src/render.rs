//! Main render/view function (View in TEA pattern)

use folio_app::AppState;
use ratatui::layout::Rect;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::data;
use crate::document::PageDocument;
use crate::event::ClickTargets;
use crate::layout;
use crate::theme::{styles, Palette};
use crate::widgets::{Footer, Navbar, ScrollHint, SectionIndicator, SectionPage};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to the state; returns the click targets of this frame
/// for mouse hit-testing.
pub fn view(frame: &mut Frame, state: &AppState, document: &PageDocument) -> ClickTargets {
    let area = frame.area();
    let mode = state.theme.mode();
    let palette = Palette::for_mode(mode);
    let areas = layout::create(area);
    let owner = state.settings.ui.owner.as_str();
    let sections = state.scroller.sections();
    let current = state.current_section();
    let mut targets = ClickTargets::new();

    frame.render_widget(Block::default().style(styles::base(palette)), area);

    let navbar = Navbar::new(owner, sections, current, mode, palette);
    targets.extend(navbar.link_regions(areas.navbar));
    frame.render_widget(navbar, areas.navbar);

    render_pages(frame, areas.pages, document, owner, palette);

    if let Some(indicator_area) = areas.indicator {
        let indicator = SectionIndicator::new(sections.len(), current, palette);
        targets.extend(indicator.dot_regions(indicator_area));
        frame.render_widget(indicator, indicator_area);
    }

    if let Some(hint_area) = areas.hint {
        if state.scroll_hint_visible() {
            frame.render_widget(ScrollHint::new(palette), hint_area);
        }
    }

    frame.render_widget(
        Footer::new(owner, palette).native_scroll(state.is_mobile()),
        areas.footer,
    );

    targets
}

/// Draw the pages overlapping the viewport, clipping the ones scrolled half out
fn render_pages(
    frame: &mut Frame,
    area: Rect,
    document: &PageDocument,
    owner: &str,
    palette: &Palette,
) {
    let page_height = document.page_height();

    for visible in document.visible_pages() {
        let Some(page) = data::page(visible.id.as_str()) else {
            continue;
        };

        let (y, skip) = if visible.top < 0 {
            (area.y, visible.top.unsigned_abs() as u16)
        } else {
            (area.y + visible.top as u16, 0)
        };
        let height = page_height
            .saturating_sub(skip)
            .min(area.bottom().saturating_sub(y));
        if height == 0 {
            continue;
        }

        let rect = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        frame.render_widget(
            SectionPage::new(page, owner, palette, page_height).skip(skip),
            rect,
        );
    }
}
