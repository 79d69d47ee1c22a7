//! One full-height portfolio page

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::data::Page;
use crate::theme::{styles, Palette};

const MARGIN: u16 = 4;

pub struct SectionPage<'a> {
    page: &'a Page,
    owner: &'a str,
    palette: &'a Palette,
    page_height: u16,
    skip: u16,
}

impl<'a> SectionPage<'a> {
    pub fn new(page: &'a Page, owner: &'a str, palette: &'a Palette, page_height: u16) -> Self {
        Self {
            page,
            owner,
            palette,
            page_height,
            skip: 0,
        }
    }

    /// Rows cut off above the visible area (page partly scrolled out)
    pub fn skip(mut self, rows: u16) -> Self {
        self.skip = rows;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let heading = self.page.heading.unwrap_or(self.owner);
        let mut lines = vec![
            Line::from(Span::styled(heading, styles::accent_bold(self.palette))),
            Line::from(Span::styled(
                self.page.tagline,
                styles::text_secondary(self.palette),
            )),
        ];

        for entry in self.page.entries {
            lines.push(Line::default());
            let mut title = vec![Span::styled(entry.title, styles::heading(self.palette))];
            if !entry.meta.is_empty() {
                title.push(Span::styled(" · ", styles::text_muted(self.palette)));
                title.push(Span::styled(entry.meta, styles::text_muted(self.palette)));
            }
            lines.push(Line::from(title));
            if !entry.body.is_empty() {
                lines.push(Line::from(Span::styled(
                    entry.body,
                    styles::text_primary(self.palette),
                )));
            }
        }

        lines
    }

    /// Blank rows above the content; the landing page sits a third of the way down
    fn top_padding(&self) -> u16 {
        if self.page.entries.is_empty() {
            self.page_height / 3
        } else {
            1
        }
    }
}

impl Widget for SectionPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, styles::base(self.palette));
        if area.width <= MARGIN * 2 || area.height == 0 {
            return;
        }

        let content = Rect {
            x: area.x + MARGIN,
            width: area.width - MARGIN * 2,
            ..area
        };

        let padding = self.top_padding();
        let mut lines = vec![Line::default(); padding as usize];
        lines.extend(self.lines());

        Paragraph::new(lines)
            .style(styles::base(self.palette))
            .wrap(Wrap { trim: true })
            .scroll((self.skip, 0))
            .render(content, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::LIGHT;

    #[test]
    fn test_hero_shows_owner_and_tagline() {
        let page = data::page("hero").unwrap();
        let mut term = TestTerminal::new();

        term.render_widget(SectionPage::new(page, "Ada Lovelace", &LIGHT, 24), term.area());

        assert!(term.buffer_contains("Ada Lovelace"));
        assert!(term.buffer_contains("Data & AI"));
        // A third of the way down
        assert!(term.line_contains(8, "Ada Lovelace"));
    }

    #[test]
    fn test_page_lists_entries() {
        let page = data::page("projects").unwrap();
        let mut term = TestTerminal::new();

        term.render_widget(SectionPage::new(page, "Ada", &LIGHT, 24), term.area());

        assert!(term.line_contains(1, "Projects"));
        assert!(term.buffer_contains("Connect 4"));
        assert!(term.buffer_contains("Computer vision"));
    }

    #[test]
    fn test_skip_scrolls_content_up() {
        let page = data::page("projects").unwrap();
        let mut term = TestTerminal::new();

        term.render_widget(
            SectionPage::new(page, "Ada", &LIGHT, 24).skip(1),
            term.area(),
        );

        assert!(term.line_contains(0, "Projects"));
    }

    #[test]
    fn test_page_fills_background() {
        let page = data::page("about").unwrap();
        let mut term = TestTerminal::with_size(40, 10);

        term.render_widget(SectionPage::new(page, "Ada", &LIGHT, 10), term.area());

        assert_eq!(term.buffer()[(0, 9)].bg, LIGHT.background);
    }
}
