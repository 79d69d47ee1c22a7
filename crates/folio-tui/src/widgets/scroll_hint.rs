//! "Scroll to explore" hint shown on the landing page

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct ScrollHint<'a> {
    palette: &'a Palette,
}

impl<'a> ScrollHint<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

impl Widget for ScrollHint<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled("↓ ", styles::accent_bold(self.palette)),
            Span::styled("scroll or press ↓ to explore", styles::text_muted(self.palette)),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
