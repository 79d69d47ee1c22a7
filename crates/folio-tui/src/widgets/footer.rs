//! Bottom status line: copyright on the left, key hints on the right

use chrono::{Datelike, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

pub struct Footer<'a> {
    owner: &'a str,
    palette: &'a Palette,
    year: i32,
    native_scroll: bool,
}

impl<'a> Footer<'a> {
    pub fn new(owner: &'a str, palette: &'a Palette) -> Self {
        Self {
            owner,
            palette,
            year: Local::now().year(),
            native_scroll: false,
        }
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Mark that wheel input scrolls freely instead of snapping
    pub fn native_scroll(mut self, native: bool) -> Self {
        self.native_scroll = native;
        self
    }

    fn key_hints(&self) -> Line<'static> {
        let key = styles::keybinding(self.palette);
        let text = styles::text_muted(self.palette);
        let mut spans = Vec::new();
        if self.native_scroll {
            spans.push(Span::styled("free scroll  ", text));
        }
        spans.extend([
            Span::styled("↑↓", key),
            Span::styled(" navigate  ", text),
            Span::styled("1-9", key),
            Span::styled(" jump  ", text),
            Span::styled("t", key),
            Span::styled(" theme  ", text),
            Span::styled("q", key),
            Span::styled(" quit ", text),
        ]);
        Line::from(spans)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, styles::base(self.palette));

        let copyright = Line::from(Span::styled(
            format!(" © {} {} | Built with ratatui", self.year, self.owner),
            styles::text_muted(self.palette),
        ));
        let hints = self.key_hints();

        let hints_width = hints.width() as u16;
        let copyright_width = copyright.width() as u16;
        buf.set_line(area.x, area.y, &copyright, area.width);
        if copyright_width + hints_width < area.width {
            buf.set_line(area.right() - hints_width, area.y, &hints, hints_width);
        }
    }
}
