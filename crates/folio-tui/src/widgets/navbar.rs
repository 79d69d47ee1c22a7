//! Top navigation bar
//!
//! Owner name on the left (links to the first section), one link per
//! remaining section, and the theme badge on the right.

use folio_core::{SectionList, ThemeMode};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::data;
use crate::theme::{styles, Palette};

const LINK_GAP: u16 = 3;

pub struct Navbar<'a> {
    owner: &'a str,
    sections: &'a SectionList,
    active: usize,
    mode: ThemeMode,
    palette: &'a Palette,
}

impl<'a> Navbar<'a> {
    pub fn new(
        owner: &'a str,
        sections: &'a SectionList,
        active: usize,
        mode: ThemeMode,
        palette: &'a Palette,
    ) -> Self {
        Self {
            owner,
            sections,
            active,
            mode,
            palette,
        }
    }

    /// Clickable regions (brand and links) paired with their section index
    pub fn link_regions(&self, area: Rect) -> Vec<(Rect, usize)> {
        let inner = styles::glass_block(self.palette, false).inner(area);
        self.layout(inner)
            .into_iter()
            .map(|(rect, index, _)| (rect, index))
            .collect()
    }

    fn theme_badge(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => "[t] ☾ dark",
            ThemeMode::Dark => "[t] ☀ light",
        }
    }

    /// Position of the brand and each link that fits before the theme badge
    fn layout(&self, inner: Rect) -> Vec<(Rect, usize, &'a str)> {
        if inner.height == 0 || inner.width == 0 {
            return Vec::new();
        }

        let badge_width = Span::raw(self.theme_badge()).width() as u16 + 1;
        let limit = inner.right().saturating_sub(badge_width);
        let mut x = inner.x + 1;
        let mut regions = Vec::new();

        let brand = std::iter::once((0, self.owner));
        let links = self
            .sections
            .iter()
            .enumerate()
            .skip(1)
            .map(|(index, id)| (index, data::label(id.as_str())));

        for (index, label) in brand.chain(links) {
            let width = Span::raw(label).width() as u16;
            if x + width > limit {
                break;
            }
            regions.push((Rect::new(x, inner.y, width, 1), index, label));
            x += width + LINK_GAP;
        }

        regions
    }
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        for (position, (rect, index, label)) in self.layout(inner).into_iter().enumerate() {
            let style = if position == 0 {
                styles::accent_bold(self.palette)
            } else {
                styles::link(self.palette, index == self.active)
            };
            buf.set_span(rect.x, rect.y, &Span::styled(label, style), rect.width);
        }

        let badge = Line::from(vec![Span::styled(
            self.theme_badge(),
            styles::keybinding(self.palette),
        )]);
        let badge_width = badge.width() as u16;
        if badge_width < inner.width {
            let x = inner.right().saturating_sub(badge_width + 1);
            buf.set_line(x, inner.y, &badge, badge_width);
        }
    }
}
